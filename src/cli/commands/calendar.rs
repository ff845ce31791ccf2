use super::{local, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::month_view;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{dimmed, header, info};
use crate::utils::date::parse_month;
use ansi_term::Colour::{Cyan, Yellow};
use chrono::{Datelike, NaiveDate, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let offset = cfg.offset()?;

        let (year, month) = match month {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidPeriod(m.clone()))?,
            None => {
                let now = Utc::now().with_timezone(&offset);
                (now.year(), now.month())
            }
        };

        let pool = open_db(cfg)?;
        let view = month_view(&pool.conn, year, month, offset)?;

        let title = view
            .first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", year, month));
        header(format!("{} (UTC{})", title, offset));

        if view.days.is_empty() {
            info("No events this month.");
        }

        for (day, events) in &view.days {
            let label = NaiveDate::from_ymd_opt(year, month, *day)
                .map(|d| d.format("%a %d").to_string())
                .unwrap_or_else(|| day.to_string());
            println!("{}", Yellow.bold().paint(label));

            for event in events {
                println!(
                    "   {}  {} {}",
                    Cyan.paint(local(&event.begin, &offset, "%H:%M")),
                    event.title,
                    dimmed(format!("(#{})", event.id.unwrap_or_default()))
                );
            }
        }

        if let Some(((py, pm), (ny, nm))) = view.neighbours() {
            println!();
            println!(
                "{}",
                dimmed(format!(
                    "‹ {}-{:02}   {} event(s)   {}-{:02} ›",
                    py,
                    pm,
                    view.event_count(),
                    ny,
                    nm
                ))
            );
        }
    }

    Ok(())
}
