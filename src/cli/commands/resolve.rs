use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::urls::urlconf;
use ansi_term::Colour::Cyan;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Resolve { path } = cmd {
        let resolved = urlconf(cfg)?.resolve(path)?;

        println!("{} {}", Cyan.paint("name:"), resolved.name);
        println!("{} {}", Cyan.paint("view:"), resolved.view);
        if let Some(identifier) = resolved.identifier {
            println!("{} {}", Cyan.paint("args:"), identifier);
        }
    }

    Ok(())
}
