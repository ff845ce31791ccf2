use super::{local, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::Event;
use crate::ui::messages::info;
use crate::utils::date::period_range;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::views::ListView;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct EventRow {
    #[serde(flatten)]
    event: Event,
    end: Option<DateTime<Utc>>,
    tags: Vec<String>,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, tag, json } = cmd {
        let pool = open_db(cfg)?;
        let conn = &pool.conn;
        let offset = cfg.offset()?;

        let mut events = match tag {
            Some(name) => queries::load_events_by_tag(conn, name)?,
            None => ListView::<Event>::new().get_queryset(conn)?,
        };

        if let Some(p) = period {
            let (from, to) = period_range(p, &offset)?;
            events.retain(|e| e.begin >= from && e.begin < to);
        }

        let mut rows = Vec::with_capacity(events.len());
        for event in events {
            let tags = event
                .get_tags(conn)?
                .into_iter()
                .map(|t| t.name)
                .collect();
            rows.push(EventRow {
                end: event.end(),
                event,
                tags,
            });
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            info("No events found.");
            return Ok(());
        }

        let fmt = cfg.datetime_format.as_str();
        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("Begin"),
            Column::new("End"),
            Column::new("Duration"),
            Column::new("Title").max_width(40),
            Column::new("Tags").max_width(30),
        ]);

        for row in &rows {
            table.add_row(vec![
                row.event.id.unwrap_or_default().to_string(),
                local(&row.event.begin, &offset, fmt),
                row.end
                    .map(|e| local(&e, &offset, fmt))
                    .unwrap_or_else(|| "--".into()),
                row.event
                    .duration
                    .map(mins2readable)
                    .unwrap_or_else(|| "--".into()),
                row.event.title.clone(),
                row.tags.join(" "),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
