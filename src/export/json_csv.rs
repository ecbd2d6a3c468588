// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::EntryExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the snapshot blob as is.
pub(crate) fn export_json(blob: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(blob.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with header row from the serde field names.
pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
