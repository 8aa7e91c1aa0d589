//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `pedestrian_snapshots.csv`
//! - `step_summaries.csv`
//! - `pedestrian_stats.csv`
//!
//! Missing optional values are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PedestrianSnapshotRow, PedestrianStatsRow, StepSummaryRow};

pub const SNAPSHOTS_FILE: &str = "pedestrian_snapshots.csv";
pub const SUMMARIES_FILE: &str = "step_summaries.csv";
pub const STATS_FILE:     &str = "pedestrian_stats.csv";

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    stats:     Writer<File>,
    finished:  bool,
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["pedestrian_id", "step", "row", "col", "is_finished", "moved_cells"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["step", "active", "moved", "arrived", "waiting"])?;

        let mut stats = Writer::from_path(dir.join(STATS_FILE))?;
        stats.write_record([
            "pedestrian_id",
            "name",
            "age",
            "nominal_speed",
            "steps_to_target",
            "moved_cells",
            "actual_speed",
            "measured_speed",
            "is_finished",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            stats,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PedestrianSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.pedestrian_id.to_string(),
                row.step.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                (row.is_finished as u8).to_string(),
                row.moved_cells.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.active.to_string(),
            row.moved.to_string(),
            opt(row.arrived),
            row.waiting.to_string(),
        ])?;
        Ok(())
    }

    fn write_stats(&mut self, rows: &[PedestrianStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.stats.write_record(&[
                row.pedestrian_id.to_string(),
                row.name.clone(),
                row.age.to_string(),
                row.nominal_speed.to_string(),
                row.steps_to_target.to_string(),
                row.moved_cells.to_string(),
                opt(row.actual_speed),
                opt(row.measured_speed),
                (row.is_finished as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.stats.flush()?;
        Ok(())
    }
}
