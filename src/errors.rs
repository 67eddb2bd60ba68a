//! Unified application error type.
//! All modules (core, export, forecast, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Series state
    // ---------------------------
    #[error("The reading series is empty (was it seeded?)")]
    EmptySeries,

    #[error("At least two readings are needed, found {0}")]
    InsufficientHistory(usize),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid reading: {0}")]
    InvalidReading(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    // ---------------------------
    // Language model
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Shell error: {0}")]
    Shell(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
