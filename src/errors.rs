//! Unified application error type.
//! All modules (core, input, output, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Input sources
    // ---------------------------
    #[error("Resource unavailable: {path}: {reason}")]
    ResourceUnavailable { path: String, reason: String },

    #[error("Invalid holiday data: month={month}, day={day}")]
    InvalidHolidayData { month: String, day: String },

    #[error("Malformed date field: '{0}'")]
    MalformedDateField(String),

    #[error("Malformed row {row}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    // ---------------------------
    // Calendar arithmetic
    // ---------------------------
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Wrapped library errors
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    /// Build a `ResourceUnavailable` from a path and any displayable cause.
    pub fn unavailable<P: AsRef<std::path::Path>, E: std::fmt::Display>(path: P, err: E) -> Self {
        AppError::ResourceUnavailable {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
