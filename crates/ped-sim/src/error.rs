use ped_core::{Cell, CoreError};
use ped_grid::{GridError, Occupant};
use thiserror::Error;

use crate::PlacementConflict;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{occupant} at {cell} lies outside the {height}x{width} grid")]
    OutOfBounds {
        occupant: Occupant,
        cell:     Cell,
        height:   u32,
        width:    u32,
    },

    #[error("{count} overlapping placement(s), first: {first}")]
    PlacementConflicts {
        count: usize,
        first: PlacementConflict,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
