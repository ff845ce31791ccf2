use super::{load_event, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::routes::Operation;
use crate::ui::messages::{info, success, warning};
use crate::urls::urlconf;
use crate::views::{DeleteView, GenericView, Model};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let pool = open_db(cfg)?;
        let urls = urlconf(cfg)?;

        let event = load_event(&pool, *id)?;

        if !*force
            && !ask_confirmation(&format!(
                "Delete event #{} \"{}\"? This action is irreversible.",
                id, event.title
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        // Go through the delete route, like a submitted delete form would.
        let path = urls.absolute_url(&event, Operation::Delete)?;
        let resolved = urls.resolve(&path)?;
        let (GenericView::Delete { success_url_name }, Some(identifier)) =
            (resolved.view, resolved.identifier)
        else {
            return Err(AppError::Other(format!(
                "route {} is not served by a delete view",
                path
            )));
        };

        let next = DeleteView::<Event>::new(&success_url_name).post(&pool.conn, &urls, &identifier)?;

        success(format!("{} #{} has been deleted.", Event::MODEL_NAME, id));
        println!("→ {}", next);
    }

    Ok(())
}
