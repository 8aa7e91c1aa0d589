//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use ped_core::Step;
use ped_entity::Pedestrian;
use ped_sim::{RunOutcome, SimObserver, StepReport};
use tracing::warn;

use crate::row::{PedestrianSnapshotRow, PedestrianStatsRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots, step summaries, and final
/// statistics to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `model.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `model.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, report: &StepReport) {
        let row = StepSummaryRow {
            step:    report.step.0,
            active:  report.active as u64,
            moved:   report.moved as u64,
            arrived: report.arrived.map(|id| id.0),
            waiting: report.waiting as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, pedestrians: &[Pedestrian]) {
        let rows: Vec<PedestrianSnapshotRow> = pedestrians
            .iter()
            .enumerate()
            .map(|(i, p)| PedestrianSnapshotRow::new(i as u32, step.0, p))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _outcome: &RunOutcome, pedestrians: &[Pedestrian]) {
        let rows: Vec<PedestrianStatsRow> = pedestrians
            .iter()
            .enumerate()
            .map(|(i, p)| PedestrianStatsRow::new(i as u32, p))
            .collect();
        let result = self.writer.write_stats(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
