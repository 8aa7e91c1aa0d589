//! Configuration errors raised by `ped-core`.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enum.

use thiserror::Error;

/// Rejected [`ModelConfig`](crate::ModelConfig) values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ped-core`.
pub type CoreResult<T> = Result<T, CoreError>;
