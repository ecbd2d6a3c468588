use crate::cli::commands::open_vault;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::PayrollPeriod;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let period = period
            .as_deref()
            .map(str::parse::<PayrollPeriod>)
            .transpose()?;

        let vault = open_vault(cfg);
        let path = expand_tilde(file);

        let written = ExportLogic::export(&vault, *format, &path, period, *force)?;

        if written > 0 || *format == ExportFormat::Json {
            audit(
                &cfg.database,
                "export",
                &path.to_string_lossy(),
                &format!("{} export, {written} entries", format.as_str()),
            );
        }
    }

    Ok(())
}
