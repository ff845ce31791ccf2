//! Tag storage: the global `tags` table and the `event_tags` association.

use crate::errors::AppResult;
use crate::models::tag::Tag;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_tag(row: &Row) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn find_tag(conn: &Connection, name: &str) -> AppResult<Option<Tag>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM tags WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_tag).optional()?)
}

/// Create the tag `name` if it does not exist yet.
pub fn create_tag(conn: &Connection, name: &str) -> AppResult<Tag> {
    conn.execute("INSERT INTO tags (name) VALUES (?1)", [name])?;
    Ok(Tag {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}

pub fn get_or_create_tag(conn: &Connection, name: &str) -> AppResult<Tag> {
    match find_tag(conn, name)? {
        Some(tag) => Ok(tag),
        None => create_tag(conn, name),
    }
}

/// Tags attached to an event, ordered by name.
pub fn tags_for_event(conn: &Connection, event_id: i64) -> AppResult<Vec<Tag>> {
    let mut stmt = conn.prepare_cached(
        "SELECT t.id, t.name
         FROM tags t
         JOIN event_tags et ON et.tag_id = t.id
         WHERE et.event_id = ?1
         ORDER BY t.name ASC",
    )?;

    let rows = stmt.query_map([event_id], map_tag)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Attach a tag to an event. Returns false if it was already attached.
pub fn attach_tag(conn: &Connection, event_id: i64, tag_id: i64) -> AppResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO event_tags (event_id, tag_id) VALUES (?1, ?2)",
        params![event_id, tag_id],
    )?;
    Ok(changed > 0)
}

/// Detach a tag from an event. Returns false if it was not attached.
/// The tag itself is kept.
pub fn detach_tag(conn: &Connection, event_id: i64, tag_id: i64) -> AppResult<bool> {
    let changed = conn.execute(
        "DELETE FROM event_tags WHERE event_id = ?1 AND tag_id = ?2",
        params![event_id, tag_id],
    )?;
    Ok(changed > 0)
}

/// Every tag with the number of events carrying it, ordered by name.
pub fn load_tag_usage(conn: &Connection) -> AppResult<Vec<(Tag, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT t.id, t.name, COUNT(et.event_id)
         FROM tags t
         LEFT JOIN event_tags et ON et.tag_id = t.id
         GROUP BY t.id, t.name
         ORDER BY t.name ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok((map_tag(row)?, row.get::<_, i64>(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_tags(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))?)
}
