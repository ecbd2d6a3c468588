use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::settings::SettingField;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        rate,
        multiplier,
        threshold,
        target,
        currency,
        time_format,
    } = cmd
    {
        let mut vault = open_vault(cfg);

        let requested = [
            (SettingField::HourlyRate, rate),
            (SettingField::OvertimeMultiplier, multiplier),
            (SettingField::OvertimeThreshold, threshold),
            (SettingField::WeeklyTarget, target),
            (SettingField::CurrencySymbol, currency),
            (SettingField::TimeFormat, time_format),
        ];

        let mut changed = false;
        for (field, value) in requested {
            let Some(raw) = value else { continue };

            match vault.update_setting(field, raw) {
                Ok(()) => {
                    changed = true;
                    success(format!(
                        "{field} set to {}",
                        vault.state().settings.display_value(field)
                    ));
                    audit(&cfg.database, "settings", field.key(), raw);
                }
                Err(e) => warning(format!("{e}; keeping the previous value.")),
            }
        }

        if changed {
            report_unsaved(&vault);
            return Ok(());
        }

        header("Settings");
        let s = &vault.state().settings;
        for field in SettingField::ALL {
            println!("{}{}", pad_right(field.key(), 22), s.display_value(field));
        }
        println!("{}{}", pad_right("overtimeRate", 22), s.overtime_rate());
    }

    Ok(())
}
