//! `ped-grid`: the occupancy map of the simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`grid`]      | `Grid`: `height × width` cells, each empty or occupied    |
//! | [`occupant`]  | `Occupant`: typed reference to the entity in a cell       |
//! | [`error`]     | `GridError`, `GridResult<T>`                               |
//!
//! The grid stores *references* (typed list indices), never the entities
//! themselves; the model owns the entity lists.

pub mod error;
pub mod grid;
pub mod occupant;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Grid, EMPTY_LABEL};
pub use occupant::Occupant;
