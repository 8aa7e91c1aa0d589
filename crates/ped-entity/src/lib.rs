//! `ped-entity`: the occupants of the simulation grid.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`pedestrian`]  | `Pedestrian`: movable entity with per-run statistics     |
//! | [`fixed`]       | `Obstacle`, `Target`: immovable entities                 |
//! | [`entity`]      | `GridEntity`: tagged union over the three variants       |
//!
//! Every variant has a [`Cell`](ped_core::Cell) and a display label; only the
//! pedestrian carries mutable state.

pub mod entity;
pub mod fixed;
pub mod pedestrian;

#[cfg(test)]
mod tests;

pub use entity::GridEntity;
pub use fixed::{Obstacle, Target, OBSTACLE_LABEL, TARGET_LABEL};
pub use pedestrian::{Pedestrian, SpeedMeasurement, PEDESTRIAN_LABEL};
