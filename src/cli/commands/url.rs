use super::{load_event, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::urls::{event_routes, urlconf};
use ansi_term::Colour::Cyan;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Url { operation, id } = cmd {
        let routes = event_routes(cfg);
        let view = routes.view_class(operation)?;
        let op = view.operation();
        let name = routes.namespace().url_name(op);
        let urls = urlconf(cfg)?;

        let path = match id {
            Some(id) if op.requires_identifier() => {
                let pool = open_db(cfg)?;
                urls.absolute_url(&load_event(&pool, *id)?, op)?
            }
            _ => urls.reverse(&name, None)?,
        };

        println!("{} {}", Cyan.paint("name:"), name);
        println!("{} {}", Cyan.paint("view:"), view);
        println!("{} {}", Cyan.paint("path:"), path);
    }

    Ok(())
}
