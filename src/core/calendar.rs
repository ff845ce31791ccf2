//! Month calendar: the events of one month, grouped by local day.

use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::utils::date::local_midnight_utc;
use chrono::{Datelike, FixedOffset, Months, NaiveDate};
use rusqlite::Connection;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub offset: FixedOffset,
    /// Day of month → events beginning that day, ordered by begin.
    pub days: BTreeMap<u32, Vec<Event>>,
}

impl MonthView {
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Previous and next month, as `(year, month)`.
    pub fn neighbours(&self) -> Option<((i32, u32), (i32, u32))> {
        let first = self.first_day()?;
        let prev = first.checked_sub_months(Months::new(1))?;
        let next = first.checked_add_months(Months::new(1))?;
        Some(((prev.year(), prev.month()), (next.year(), next.month())))
    }
}

/// Events of `year`-`month` as seen from a clock at `offset`.
pub fn month_view(
    conn: &Connection,
    year: i32,
    month: u32,
    offset: FixedOffset,
) -> AppResult<MonthView> {
    let invalid = || AppError::InvalidPeriod(format!("{}-{:02}", year, month));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = first.checked_add_months(Months::new(1)).ok_or_else(invalid)?;

    let from = local_midnight_utc(first, &offset).ok_or_else(invalid)?;
    let to = local_midnight_utc(next, &offset).ok_or_else(invalid)?;

    let mut days: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
    for event in load_events_between(conn, &from, &to)? {
        let day = event.begin.with_timezone(&offset).day();
        days.entry(day).or_default().push(event);
    }

    Ok(MonthView {
        year,
        month,
        offset,
        days,
    })
}
