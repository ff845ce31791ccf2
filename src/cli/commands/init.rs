use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::migrate::report_applied;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing calevent…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path);

    let pool = DbPool::new(&db_path)?;
    report_applied(&init_db(&pool.conn)?);

    success(format!("Database initialized at {}", db_path));

    audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path),
    );

    println!("🎉 calevent initialization completed!");
    Ok(())
}
