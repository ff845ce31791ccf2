use crate::db::migrate::{Migration, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// All schema creation and upgrades go through the migration engine.
/// Returns the migrations applied on the way.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static Migration>> {
    run_pending_migrations(conn)
}
