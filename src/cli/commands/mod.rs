pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod resolve;
pub mod show;
pub mod tags;
pub mod url;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Event;
use crate::routes::Identifier;
use crate::views::DetailView;
use chrono::{DateTime, FixedOffset, Utc};

/// Open the configured database, bringing the schema up to date first.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open_migrated(&cfg.database)
}

pub(crate) fn load_event(pool: &DbPool, id: i64) -> AppResult<Event> {
    DetailView::<Event>::new().get_object(&pool.conn, &Identifier::Pk(id))
}

/// A timestamp on the configured local clock.
pub(crate) fn local(dt: &DateTime<Utc>, offset: &FixedOffset, fmt: &str) -> String {
    dt.with_timezone(offset).format(fmt).to_string()
}
