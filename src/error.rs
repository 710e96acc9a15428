use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse report {path}: {message}")]
    ReportParse { path: PathBuf, message: String },

    #[error("Report not found: {path}")]
    ReportMissing { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, SubmitGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
