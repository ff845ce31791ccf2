use super::open_db;
use crate::config::Config;
use crate::db::tags::load_tag_usage;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let usage = load_tag_usage(&pool.conn)?;

    if usage.is_empty() {
        info("No tags yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![Column::new("Tag").max_width(40), Column::new("Events")]);
    for (tag, count) in usage {
        table.add_row(vec![tag.name, count.to_string()]);
    }
    print!("{}", table.render());

    Ok(())
}
