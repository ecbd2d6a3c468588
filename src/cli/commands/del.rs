use crate::cli::commands::{ask_confirmation, open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{currency, duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut vault = open_vault(cfg);

        let entry = vault
            .entries()
            .iter()
            .find(|e| e.id == *id)
            .cloned()
            .ok_or(AppError::EntryNotFound(*id))?;

        let settings = vault.state().settings.clone();
        let prompt = format!(
            "Delete entry #{} ({}, {}, {})? This action is irreversible.",
            entry.id,
            entry.date,
            duration(entry.duration),
            currency(entry.earnings, &settings)
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        vault.delete_entry(*id)?;
        success(format!("Entry #{id} has been deleted."));
        audit(&cfg.database, "del", &id.to_string(), "Time entry deleted");
        report_unsaved(&vault);
    }

    Ok(())
}
