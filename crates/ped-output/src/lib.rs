//! `ped-output`: output writers and scenario export for the pedestrian grid
//! simulator.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`csv`]      | `CsvWriter`: `pedestrian_snapshots.csv`, `step_summaries.csv`, `pedestrian_stats.csv` |
//! | [`observer`] | `SimOutputObserver`, a `ped_sim::SimObserver` feeding any writer |
//! | [`scenario`] | Scenario-file pedestrian elements and the file editor     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ped_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! model.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod scenario;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PedestrianSnapshotRow, PedestrianStatsRow, StepSummaryRow};
pub use scenario::{Attributes, DynamicPedestrian, Position, ScenarioFile, Velocity, WalkingDirection};
pub use writer::OutputWriter;
