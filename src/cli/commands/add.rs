use super::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::forms::FormData;
use crate::models::Event;
use crate::ui::messages::success;
use crate::urls::urlconf;
use crate::views::CreateView;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        begin,
        duration,
        text,
        tags,
    } = cmd
    {
        let mut data = FormData::new();
        data.insert("title".into(), title.clone());
        data.insert("begin".into(), begin.clone());
        if let Some(d) = duration {
            data.insert("duration".into(), d.to_string());
        }
        if let Some(t) = text {
            data.insert("text".into(), t.clone());
        }
        if let Some(t) = tags {
            data.insert("tags".into(), t.clone());
        }

        let pool = open_db(cfg)?;
        let urls = urlconf(cfg)?;

        let view = CreateView::<Event>::new();
        let event = view.post(&pool.conn, &data)?;

        success(format!(
            "Event #{} \"{}\" created.",
            event.id.unwrap_or_default(),
            event.title
        ));
        println!("→ {}", view.get_success_url(&urls, &event)?);
    }

    Ok(())
}
