use super::{load_event, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::forms::FormData;
use crate::models::Event;
use crate::routes::Operation;
use crate::ui::messages::{info, success};
use crate::urls::urlconf;
use crate::views::UpdateView;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        begin,
        duration,
        clear_duration,
        text,
        tags,
    } = cmd
    {
        let mut overrides = FormData::new();
        let mut set = |name: &str, value: &Option<String>| {
            if let Some(v) = value {
                overrides.insert(name.to_string(), v.clone());
            }
        };
        set("title", title);
        set("begin", begin);
        set("text", text);
        set("tags", tags);
        set("duration", &duration.map(|d| d.to_string()));
        if *clear_duration {
            overrides.insert("duration".into(), String::new());
        }

        if overrides.is_empty() {
            info("Nothing to update.");
            return Ok(());
        }

        let pool = open_db(cfg)?;
        let urls = urlconf(cfg)?;

        let view = UpdateView::<Event>::new(load_event(&pool, *id)?);
        let data = view.bound_data(&pool.conn, &overrides)?;
        let event = view.post(&pool.conn, &data)?;

        success(format!("Event #{} \"{}\" updated.", id, event.title));
        println!("→ {}", urls.absolute_url(&event, Operation::Detail)?);
    }

    Ok(())
}
