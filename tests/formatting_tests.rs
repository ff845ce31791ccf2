use calevent::utils::formatting::{mins2readable, truncate};

#[test]
fn test_mins2readable() {
    assert_eq!(mins2readable(0), "00h 00m");
    assert_eq!(mins2readable(45), "00h 45m");
    assert_eq!(mins2readable(135), "02h 15m");
    assert_eq!(mins2readable(-90), "-01h 30m");
}

#[test]
fn test_mins2readable_extremes() {
    assert_eq!(mins2readable(i64::MIN), "-153722867280912930h 08m");
    assert_eq!(mins2readable(i64::MAX), "153722867280912930h 07m");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer title", 6), "a lon…");
}
