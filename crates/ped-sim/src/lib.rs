//! `ped-sim`: stepping engine for the pedestrian grid simulator.
//!
//! # One step
//!
//! ```text
//! for p in pedestrians (list order), skipping finished ones:
//!   ① steps_to_target += 1
//!   ② proposal = find_shortest_move(p)
//!   ③ Enter(target) and no arrival yet this step
//!        → p finishes; its old cell is freed if `disappear` is set
//!   ④ Step(cell) / Stay
//!        → clear old cell, write p into the new one
//!      Enter(target) after another arrival this step
//!        → p waits and retries next step
//! ```
//!
//! The grid is mutated in place while the list is walked, so a pedestrian
//! sees the moves of everyone processed before it in the same step.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ped_core::ModelConfig;
//! use ped_entity::{Pedestrian, Target};
//! use ped_sim::{ModelBuilder, NoopObserver};
//!
//! let mut model = ModelBuilder::new(ModelConfig::cells(5, 5))
//!     .pedestrian(Pedestrian::new(0, 0))
//!     .target(Target::new(0, 4))
//!     .build()?;
//! let outcome = model.run(&mut NoopObserver);
//! assert!(outcome.is_complete());
//! ```

pub mod builder;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod observer;
pub mod report;
pub mod zone;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use evaluator::{find_shortest_move, MoveProposal};
pub use model::Model;
pub use observer::{NoopObserver, SimObserver};
pub use report::{PlacementConflict, RunOutcome, StepReport};
pub use zone::MeasurementZone;
