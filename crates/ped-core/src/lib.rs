//! `ped-core`: foundational types for the pedestrian grid simulator.
//!
//! This crate is a dependency of every other `ped-*` crate.  It has no
//! `ped-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PedestrianId`, `ObstacleId`, `TargetId`              |
//! | [`cell`]        | `Cell` coordinate, `Direction`, Euclidean distance    |
//! | [`time`]        | `Step` counter                                        |
//! | [`config`]      | `ModelConfig`, `GridDims`, metre → cell scaling       |
//! | [`rng`]         | `SimRng` (seeded scenario generation)                 |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::{GridDims, ModelConfig, BODY_DIMENSION_M, CELLS_PER_METER};
pub use error::{CoreError, CoreResult};
pub use ids::{ObstacleId, PedestrianId, TargetId};
pub use rng::SimRng;
pub use time::Step;
