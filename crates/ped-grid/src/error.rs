//! Grid error type.

use thiserror::Error;

use ped_core::Cell;

/// Errors produced by `ped-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} lies outside the {height}x{width} grid")]
    OutOfBounds { cell: Cell, height: u32, width: u32 },

    #[error("grid dimensions must be non-zero, got {height}x{width}")]
    InvalidDimensions { height: u32, width: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
