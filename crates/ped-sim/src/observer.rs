//! Simulation observer trait for progress reporting and data collection.

use ped_core::{PedestrianId, Step};
use ped_entity::Pedestrian;

use crate::{RunOutcome, StepReport};

/// Callbacks invoked by [`Model::run`][crate::Model::run] at key points in
/// the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl SimObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, step: Step, _id: PedestrianId, p: &Pedestrian) {
///         println!("{step}: {} arrived at {:.3} m/s", p.name, p.actual_speed.unwrap_or(0.0));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any pedestrian moves.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called when a pedestrian enters a target.  `pedestrian` already has
    /// its final statistics.
    fn on_arrival(&mut self, _step: Step, _id: PedestrianId, _pedestrian: &Pedestrian) {}

    /// Called at the end of each step.
    fn on_step_end(&mut self, _report: &StepReport) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps) with read-only access to all pedestrians.
    fn on_snapshot(&mut self, _step: Step, _pedestrians: &[Pedestrian]) {}

    /// Called once after the run stops, for whatever reason.
    fn on_run_end(&mut self, _outcome: &RunOutcome, _pedestrians: &[Pedestrian]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
