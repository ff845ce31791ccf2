//! Versioned schema migrations.
//!
//! Each migration runs once; applying it records a `migration_applied` row
//! in the `log` table, keyed by the migration version.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, params};

pub struct Migration {
    pub version: &'static str,
    pub description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20131120_0001_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL CHECK(length(title) <= 255),
            text        TEXT NOT NULL DEFAULT '',
            begin       TEXT NOT NULL,
            duration    INTEGER,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20131124_0002_create_tags",
        description: "Created tags and event_tags tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS tags (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS event_tags (
            event_id  INTEGER NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            tag_id    INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (event_id, tag_id)
        );

        CREATE INDEX IF NOT EXISTS idx_event_tags_tag ON event_tags(tag_id);
        "#,
    },
    Migration {
        version: "20140105_0003_index_events_begin",
        description: "Added index on events(begin)",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_events_begin ON events(begin, id);
        "#,
    },
];

/// Ensure that the `log` table exists. Migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql).map_err(|e| {
        AppError::Migration(format!("{} failed: {}", migration.version, e))
    })?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![migration.version, migration.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations in order.
/// Returns the migrations applied by this call. Nothing is printed here.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static Migration>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for migration in MIGRATIONS {
        if is_applied(conn, migration.version)? {
            continue;
        }
        apply(conn, migration)?;
        applied.push(migration);
    }

    Ok(applied)
}

/// Print one success line per applied migration.
pub fn report_applied(applied: &[&Migration]) {
    for migration in applied {
        success(format!(
            "Migration applied: {} → {}",
            migration.version, migration.description
        ));
    }
}

/// Versions of every known migration, oldest first.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|m| m.version).collect()
}
