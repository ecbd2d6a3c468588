use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let blob = fs::read_to_string(&path)?;

        let mut vault = open_vault(cfg);
        let before = vault.entries().len();
        let count = vault.import_snapshot(&blob)?;

        success(format!(
            "Imported {count} time entries from {} (replacing {before}).",
            path.display()
        ));
        if vault.is_working() {
            warning("The imported data has an open session.");
        }

        audit(
            &cfg.database,
            "import",
            &path.to_string_lossy(),
            &format!("{count} entries imported"),
        );
        report_unsaved(&vault);
    }

    Ok(())
}
