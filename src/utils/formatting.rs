//! Formatting helpers for CLI output.

use unicode_width::UnicodeWidthStr;

/// `45` → `00h 45m`, `135` → `02h 15m`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.unsigned_abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Cut `s` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
