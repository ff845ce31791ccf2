use super::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{known_versions, report_applied, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Migrations run explicitly here, so the plain connection is enough.
        let pool = if *migrate {
            DbPool::new(&cfg.database)?
        } else {
            open_db(cfg)?
        };

        if *migrate {
            println!("{}", Cyan.paint("▶ Running migrations…"));
            let applied = run_pending_migrations(&pool.conn)?;
            report_applied(&applied);
            println!(
                "{} ({} applied, {} known)\n",
                Green.paint("✔ Migration completed."),
                applied.len(),
                known_versions().len()
            );
        }

        if *info {
            stats::print_db_info(&pool.conn, &cfg.database)?;
        }

        if *check {
            println!("{}", Cyan.paint("▶ Running integrity check…"));

            let integrity: String =
                pool.conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}\n", Green.paint("✔ Integrity check passed."));
            } else {
                println!("{} {}\n", Red.paint("✘ Integrity check failed:"), integrity);
            }
        }

        if *vacuum {
            println!("{}", Cyan.paint("▶ Running VACUUM…"));
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}\n", Green.paint("✔ Vacuum completed."));
        }
    }

    Ok(())
}
