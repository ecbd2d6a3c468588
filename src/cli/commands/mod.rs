pub mod ask;
pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod payroll;
pub mod reorder;
pub mod report;
pub mod session;
pub mod settings;
pub mod status;
pub mod suggest;
pub mod sync;
pub mod timecard;

use crate::config::Config;
use crate::core::app::TimeVault;
use crate::core::clock::SystemClock;
use crate::core::storage::{KeyValueStore, MemoryStore};
use crate::db::kv::SqliteStore;
use crate::ui::messages::warning;
use std::io::{self, Write};
use tracing::warn;

pub type CliVault = TimeVault<Box<dyn KeyValueStore>, SystemClock>;

/// Open the vault on the configured SQLite file. If the database cannot be
/// opened the command still runs, on a throwaway in-memory store.
pub fn open_vault(cfg: &Config) -> CliVault {
    let storage: Box<dyn KeyValueStore> = match SqliteStore::open(&cfg.database) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(path = %cfg.database, error = %e, "database unavailable; using memory store");
            warning(format!(
                "Database '{}' unavailable ({e}); changes will not be saved.",
                cfg.database
            ));
            Box::new(MemoryStore::new())
        }
    };

    let vault = TimeVault::open(storage, SystemClock, cfg.vault_options());

    let report = vault.load_report();
    if report.dropped_entries > 0 {
        warning(format!(
            "{} malformed time entries were skipped while loading.",
            report.dropped_entries
        ));
    }

    vault
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
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

/// Tell the user when the last save did not reach the database.
pub(crate) fn report_unsaved(vault: &CliVault) {
    if vault.persist_failures() > 0 {
        warning("Changes could not be saved; they only live in this run.");
    }
}
