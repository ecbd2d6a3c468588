// src/export/model.rs

use serde::Serialize;

use crate::models::settings::TimeFormat;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::local_datetime_of;
use crate::utils::formatting::time_of;

/// Flat row used by the CSV / XLSX / PDF writers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub earnings: f64,
}

fn stamp(ms: i64) -> String {
    local_datetime_of(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            date: e.date.format("%Y-%m-%d").to_string(),
            start: stamp(e.start_time),
            end: stamp(e.end_time),
            hours: (e.duration * 100.0).round() / 100.0,
            earnings: (e.earnings * 100.0).round() / 100.0,
        }
    }
}

/// Header for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "date", "start", "end", "hours", "earnings"]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.clone(),
        e.start.clone(),
        e.end.clone(),
        format!("{:.2}", e.hours),
        format!("{:.2}", e.earnings),
    ]
}

/// Printable rows for the PDF: clock times in the user's format.
pub(crate) fn entries_to_pdf_table(
    entries: &[TimeEntry],
    format: TimeFormat,
    currency: &str,
) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            vec![
                e.date.format("%Y-%m-%d").to_string(),
                time_of(e.start_time, format),
                time_of(e.end_time, format),
                format!("{:.2}", e.duration),
                format!("{}{:.2}", currency, e.earnings),
            ]
        })
        .collect()
}
