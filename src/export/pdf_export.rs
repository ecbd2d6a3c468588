// src/export/pdf_export.rs

use crate::core::calculator::PayrollSummary;
use crate::errors::{AppError, AppResult};
use crate::export::model::entries_to_pdf_table;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::settings::Settings;
use crate::ui::messages::info;
use std::path::Path;

const HEADERS: [&str; 5] = ["Date", "Start", "End", "Hours", "Earnings"];

fn money(settings: &Settings, amount: f64) -> String {
    format!("{}{:.2}", settings.currency_symbol, amount)
}

/// Payroll statement: period summary followed by the entries it covers.
pub(crate) fn export_pdf(summary: &PayrollSummary, settings: &Settings, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let title = format!("TimeVault Payroll - {}", summary.period);

    let range = match summary.bounds {
        Some((from, to)) => format!("{} to {}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d")),
        None => "All recorded entries".to_string(),
    };

    let lines = vec![
        ("Period".to_string(), range),
        ("Entries".to_string(), summary.entries.len().to_string()),
        (
            "Regular hours".to_string(),
            format!(
                "{:.2} h @ {}/h = {}",
                summary.split.regular,
                money(settings, summary.hourly_rate),
                money(settings, summary.regular_pay)
            ),
        ),
        (
            "Overtime hours".to_string(),
            format!(
                "{:.2} h @ {}/h = {}",
                summary.split.overtime,
                money(settings, summary.overtime_rate),
                money(settings, summary.overtime_pay)
            ),
        ),
        ("Total hours".to_string(), format!("{:.2} h", summary.total_hours())),
        ("Gross pay".to_string(), money(settings, summary.gross_pay)),
    ];

    let rows = entries_to_pdf_table(&summary.entries, settings.time_format, &settings.currency_symbol);

    let mut pdf = PdfManager::new();
    pdf.write_statement(&title, &lines, &HEADERS, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
