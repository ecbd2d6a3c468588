//! `in`, `out` and `undo`.

use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{color_for_overtime, colorize};
use crate::utils::formatting::{currency, duration, time_of};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut vault = open_vault(cfg);
    let settings = vault.state().settings.clone();

    match cmd {
        Commands::In => match vault.clock_in() {
            Some(start) => {
                let at = time_of(start, settings.time_format);
                success(format!("Clocked in at {at}."));
                audit(&cfg.database, "clock_in", &at, "Session started");
            }
            None => {
                let since = vault
                    .session_start()
                    .map(|s| time_of(s, settings.time_format))
                    .unwrap_or_default();
                warning(format!("Already clocked in since {since}."));
            }
        },

        Commands::Out => match vault.clock_out() {
            Some(receipt) => {
                let e = &receipt.entry;
                success(format!(
                    "Clocked out: {} worked, {} earned.",
                    duration(e.duration),
                    currency(e.earnings, &settings)
                ));
                println!(
                    "   regular {:.2}h  overtime {}",
                    receipt.split.regular,
                    colorize(
                        &format!("{:.2}h", receipt.split.overtime),
                        color_for_overtime(receipt.split.overtime)
                    )
                );

                let secs = receipt.undo.remaining_ms(vault.now()) / 1000;
                info(format!("Entry #{} saved. Undo with `timevault undo` within {secs}s.", e.id));

                audit(
                    &cfg.database,
                    "clock_out",
                    &e.id.to_string(),
                    &format!("{:.2}h, {:.2} earned", e.duration, e.earnings),
                );
            }
            None => warning("You're not currently clocked in."),
        },

        Commands::Undo => {
            let entry = vault.undo_clock_out()?;
            success(format!(
                "Clock-out undone; entry #{} removed, session resumed since {}.",
                entry.id,
                time_of(entry.start_time, settings.time_format)
            ));
            audit(&cfg.database, "undo", &entry.id.to_string(), "Clock-out undone");
        }

        _ => {}
    }

    report_unsaved(&vault);
    Ok(())
}
