use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::utils::date;
use chrono::{DateTime, Local, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENTS: &str = "SELECT id, title, text, begin, duration FROM events";

pub fn map_row(row: &Row) -> Result<Event> {
    let begin_str: String = row.get("begin")?;

    let begin = date::from_db_string(&begin_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(begin_str.clone())),
        )
    })?;

    Ok(Event {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        text: row.get("text")?,
        begin,
        duration: row.get("duration")?,
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new event and return its id.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, text, begin, duration, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.title,
            ev.text,
            date::to_db_string(&ev.begin),
            ev.duration,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an event (all fields except id).
pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    let id = ev.id.ok_or(AppError::Unsaved("Event"))?;
    let changed = conn.execute(
        "UPDATE events
         SET title = ?1, text = ?2, begin = ?3, duration = ?4
         WHERE id = ?5",
        params![
            ev.title,
            ev.text,
            date::to_db_string(&ev.begin),
            ev.duration,
            id
        ],
    )?;

    if changed == 0 {
        return Err(AppError::ObjectNotFound {
            model: "Event",
            lookup: format!("id={}", id),
        });
    }
    Ok(())
}

/// Delete an event. Returns false if no such event existed.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

pub fn get_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare(&format!("{SELECT_EVENTS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// All events, ordered by begin.
pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    collect(
        conn,
        &format!("{SELECT_EVENTS} ORDER BY begin ASC, id ASC"),
        [],
    )
}

/// Events beginning in `[from, to)`, ordered by begin.
pub fn load_events_between(
    conn: &Connection,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> AppResult<Vec<Event>> {
    collect(
        conn,
        &format!("{SELECT_EVENTS} WHERE begin >= ?1 AND begin < ?2 ORDER BY begin ASC, id ASC"),
        params![date::to_db_string(from), date::to_db_string(to)],
    )
}

/// Events carrying the tag `name`, ordered by begin.
pub fn load_events_by_tag(conn: &Connection, name: &str) -> AppResult<Vec<Event>> {
    collect(
        conn,
        "SELECT e.id, e.title, e.text, e.begin, e.duration
         FROM events e
         JOIN event_tags et ON et.event_id = e.id
         JOIN tags t ON t.id = et.tag_id
         WHERE t.name = ?1
         ORDER BY e.begin ASC, e.id ASC",
        [name],
    )
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?)
}
