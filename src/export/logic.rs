// src/export/logic.rs

use crate::core::app::TimeVault;
use crate::core::calculator::PayrollPeriod;
use crate::core::clock::Clock;
use crate::core::storage::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the vault to `file` in the given format.
    ///
    /// - `json`: the full snapshot; `period` does not apply.
    /// - `csv` / `xlsx`: entries whose start falls in `period` (all when `None`).
    /// - `pdf`: payroll statement for `period` (current month when `None`).
    ///
    /// Returns the number of entries written. Nothing is written when a
    /// csv/xlsx/pdf selection is empty.
    pub fn export<S: KeyValueStore, C: Clock>(
        vault: &TimeVault<S, C>,
        format: ExportFormat,
        file: &Path,
        period: Option<PayrollPeriod>,
        force: bool,
    ) -> AppResult<usize> {
        if !file.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                file.display()
            )));
        }

        ensure_writable(file, force)?;

        if format == ExportFormat::Json {
            if period.is_some() {
                warning("The JSON export is a full snapshot; --period is ignored.");
            }
            export_json(&vault.export_snapshot()?, file)?;
            return Ok(vault.entries().len());
        }

        let summary = vault.payroll(period.unwrap_or(match format {
            ExportFormat::Pdf => PayrollPeriod::CurrentMonth,
            _ => PayrollPeriod::All,
        }));

        if summary.entries.is_empty() {
            warning(format!("No time entries found for {}.", summary.period));
            return Ok(0);
        }

        match format {
            ExportFormat::Csv | ExportFormat::Xlsx => {
                let rows: Vec<EntryExport> = summary.entries.iter().map(EntryExport::from).collect();
                if format == ExportFormat::Csv {
                    export_csv(&rows, file)?;
                } else {
                    export_xlsx(&rows, file)?;
                }
            }
            ExportFormat::Pdf => export_pdf(&summary, &vault.state().settings, file)?,
            ExportFormat::Json => {}
        }

        Ok(summary.entries.len())
    }
}
