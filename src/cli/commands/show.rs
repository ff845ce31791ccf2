use super::{load_event, local, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::routes::Operation;
use crate::ui::messages::{dimmed, header};
use crate::urls::urlconf;
use crate::utils::mins2readable;
use ansi_term::Colour::Cyan;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = open_db(cfg)?;
        let event = load_event(&pool, *id)?;
        let offset = cfg.offset()?;
        let fmt = cfg.datetime_format.as_str();

        header(format!("#{} {}", id, event.title));

        println!("{} {}", Cyan.paint("Begin:   "), local(&event.begin, &offset, fmt));
        match event.end() {
            Some(end) => println!("{} {}", Cyan.paint("End:     "), local(&end, &offset, fmt)),
            None => println!("{} {}", Cyan.paint("End:     "), dimmed("--")),
        }
        if let Some(minutes) = event.duration {
            println!("{} {}", Cyan.paint("Duration:"), mins2readable(minutes));
        }

        let tags: Vec<String> = event
            .get_tags(&pool.conn)?
            .into_iter()
            .map(|t| t.name)
            .collect();
        if !tags.is_empty() {
            println!("{} {}", Cyan.paint("Tags:    "), tags.join(" "));
        }

        if !event.text.is_empty() {
            println!();
            println!("{}", textwrap::fill(&event.text, 72));
        }

        let urls = urlconf(cfg)?;
        println!();
        println!("{}", dimmed(urls.absolute_url(&event, Operation::Detail)?));
    }

    Ok(())
}
