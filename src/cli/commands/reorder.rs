use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reorder { ids } = cmd {
        let mut vault = open_vault(cfg);
        vault.reorder(ids)?;

        success(format!("Reordered {} entries.", ids.len()));
        audit(
            &cfg.database,
            "reorder",
            &format!("{} entries", ids.len()),
            "Entries reordered",
        );
        report_unsaved(&vault);
    }

    Ok(())
}
