//! Unified application error type.
//! All modules (core, render, export, db, cli) return AppError to keep the
//! error handling consistent. Per-event anomalies inside a log sheet are never
//! errors: the renderer skips them.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Activity log database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid trip log document: {0}")]
    TripLog(#[from] serde_json::Error),

    #[error("Invalid pointer position: {0}")]
    InvalidPointer(String),

    // ---------------------------
    // Data source / selection
    // ---------------------------
    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("No log sheets found for trip {0}")]
    NoLogSheets(String),

    #[error("Day {0} not found in trip log")]
    DayNotFound(u32),

    #[error("Log data not ready: {0}")]
    NotReady(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported for this command: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(format!("CSV error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
