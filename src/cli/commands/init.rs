use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::kv::SqliteStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// Creates the config directory and file (unless `--test`), the SQLite
/// database, and applies pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing TimeVault…");

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    let store = SqliteStore::open(&db_path)?;

    if let Err(e) = ttlog(
        store.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {db_path}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 TimeVault initialization completed!");
    Ok(())
}
