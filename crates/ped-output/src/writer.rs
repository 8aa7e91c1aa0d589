//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PedestrianSnapshotRow, PedestrianStatsRow, StepSummaryRow};

/// Sink for the rows produced during a run.
///
/// The observer driving a writer cannot return errors, so it keeps the first
/// one for [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of pedestrian snapshots.
    fn write_snapshots(&mut self, rows: &[PedestrianSnapshotRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write the final per-pedestrian statistics.
    fn write_stats(&mut self, rows: &[PedestrianStatsRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
