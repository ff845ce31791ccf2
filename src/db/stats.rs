use crate::db::{queries, tags};
use crate::errors::AppResult;
use crate::utils::date;
use ansi_term::Colour::{Cyan, Fixed, Green, Yellow};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.2} MB", Cyan.paint("• Size:"), file_mb);

    //
    // 2) TOTALS
    //
    let events = queries::count_events(conn)?;
    let tag_count = tags::count_tags(conn)?;
    println!(
        "{} {}",
        Cyan.paint("• Total events:"),
        Green.paint(events.to_string())
    );
    println!(
        "{} {}",
        Cyan.paint("• Total tags:"),
        Green.paint(tag_count.to_string())
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = conn
        .query_row(
            "SELECT begin FROM events ORDER BY begin ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = conn
        .query_row(
            "SELECT begin FROM events ORDER BY begin DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt = |raw: Option<String>| match raw.as_deref().and_then(date::from_db_string) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => Fixed(8).paint("--").to_string(),
    };

    println!("{}", Cyan.paint("• Date range:"));
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
