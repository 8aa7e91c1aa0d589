//! Error types for ped-output.

use thiserror::Error;

/// Errors that can occur when writing simulation output or editing a
/// scenario file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scenario document lacks a field the editor needs.
    #[error("malformed scenario: {0}")]
    Scenario(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
