use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { email, pin } = cmd {
        let mut vault = open_vault(cfg);

        if let Some(email) = email {
            let code = vault.sync_with_email(email)?;
            success(format!("Sync email saved. Your sync code: {}", bold(&code)));
            audit(&cfg.database, "sync", "email", "Sync email saved");
        } else if let Some(pin) = pin {
            vault.sync_with_pin(pin)?;
            success("Sync PIN saved.");
            audit(&cfg.database, "sync", "pin", "Sync PIN saved");
        } else {
            let sync = &vault.state().sync;
            match &sync.email {
                Some(e) => info(format!("Sync email: {e}")),
                None => info("No sync email set. Use `timevault sync --email <address>`."),
            }
        }

        report_unsaved(&vault);
    }

    Ok(())
}
