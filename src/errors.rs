//! Unified application error type.
//! Every layer (db, core, assistant, cli) returns AppError so error handling
//! stays consistent. None of these variants is fatal to the accounting core:
//! the controller degrades (no persistence, no external assistant) instead.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Storage unavailable: {0}")]
    Persistence(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Entry store / session
    // ---------------------------
    #[error("No time entry with id {0}")]
    EntryNotFound(i64),

    #[error("Reorder rejected: {0}")]
    InvalidReorder(String),

    #[error("Undo not available: {0}")]
    UndoUnavailable(String),

    // ---------------------------
    // Import / export
    // ---------------------------
    #[error("Invalid backup file format: {0}")]
    ImportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Assistant backend
    // ---------------------------
    #[error("Assistant backend unavailable: {0}")]
    BackendUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
