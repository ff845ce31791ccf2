use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

/// Formats accepted for date/time input, tried in order after RFC 3339.
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Storage format: fixed width, so text ordering equals time ordering.
const DB_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const FORM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse user input into a UTC timestamp.
/// Inputs without an offset are taken as UTC; a bare date means midnight.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in INPUT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn to_db_string(dt: &DateTime<Utc>) -> String {
    dt.format(DB_FORMAT).to_string()
}

pub fn from_db_string(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn to_form_string(dt: &DateTime<Utc>) -> String {
    dt.format(FORM_FORMAT).to_string()
}

/// Parse a UTC offset such as `+01:00`, `-05:30`, `+0200` or `Z`.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let s = s.trim();
    let invalid = || AppError::InvalidOffset(s.to_string());

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parse `YYYY-MM`.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((first.year(), first.month()))
}

/// Resolve a period (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`, in local time at
/// `offset`) into a half-open UTC range.
pub fn period_range(p: &str, offset: &FixedOffset) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let p = p.trim();
    let invalid = || AppError::InvalidPeriod(p.to_string());

    let (start, end) = if let Some(day) = parse_date(p) {
        (day, day.succ_opt().ok_or_else(invalid)?)
    } else if let Some((year, month)) = parse_month(p) {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        (first, first.checked_add_months(Months::new(1)).ok_or_else(invalid)?)
    } else if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        (
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?,
            NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(invalid)?,
        )
    } else {
        return Err(invalid());
    };

    Ok((
        local_midnight_utc(start, offset).ok_or_else(invalid)?,
        local_midnight_utc(end, offset).ok_or_else(invalid)?,
    ))
}

/// UTC instant of midnight on `day` at `offset`.
pub fn local_midnight_utc(day: NaiveDate, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
