use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("This deletes every entry and resets all settings. Re-run with --yes to confirm.");
            return Ok(());
        }

        let mut vault = open_vault(cfg);
        let removed = vault.entries().len();
        vault.clear_all();

        success(format!("All data cleared ({removed} entries removed)."));
        audit(&cfg.database, "clear", "all", &format!("{removed} entries removed"));
        report_unsaved(&vault);
    }

    Ok(())
}
