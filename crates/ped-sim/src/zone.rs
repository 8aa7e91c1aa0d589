//! Optional speed measurement between two grid rows.

use ped_entity::Pedestrian;

use crate::{SimError, SimResult};

/// A measuring section spanning `min_col..=max_col` between an entry row and
/// an exit row.
///
/// A pedestrian's clock starts the first time it stands on the entry row
/// inside the column span, and stops the first time it then stands on the
/// exit row inside the span.  The measured speed is
/// `|exit_row - entry_row| / steps_in_zone * speed_meters_per_sec`, i.e. the
/// same cells-per-step scaling as `actual_speed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeasurementZone {
    pub entry_row: i32,
    pub exit_row:  i32,
    pub min_col:   i32,
    pub max_col:   i32,
}

impl MeasurementZone {
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the rows coincide or the column span
    /// is empty.
    pub fn new(entry_row: i32, exit_row: i32, min_col: i32, max_col: i32) -> SimResult<Self> {
        if entry_row == exit_row {
            return Err(SimError::Config(format!(
                "measurement zone entry and exit rows must differ, both are {entry_row}"
            )));
        }
        if min_col > max_col {
            return Err(SimError::Config(format!(
                "measurement zone column span {min_col}..={max_col} is empty"
            )));
        }
        Ok(Self { entry_row, exit_row, min_col, max_col })
    }

    /// Zone length in cells.
    #[inline]
    pub fn length_cells(&self) -> u64 {
        u64::from(self.entry_row.abs_diff(self.exit_row))
    }

    #[inline]
    fn spans(&self, col: i32) -> bool {
        (self.min_col..=self.max_col).contains(&col)
    }

    /// Update `pedestrian`'s measurement for its current cell.
    pub fn observe(&self, pedestrian: &mut Pedestrian) {
        let cell  = pedestrian.cell;
        let steps = pedestrian.steps_to_target;
        let speed = pedestrian.speed_meters_per_sec;
        if !self.spans(cell.col) {
            return;
        }

        let m = &mut pedestrian.measurement;
        if cell.row == self.entry_row {
            if m.start_step.is_none() {
                m.start_step = Some(steps);
            }
        } else if cell.row == self.exit_row && m.measured_speed.is_none() {
            if let Some(start) = m.start_step {
                let in_zone = steps.saturating_sub(start);
                if in_zone > 0 {
                    m.steps_in_zone  = Some(in_zone);
                    m.measured_speed = Some(Pedestrian::speed_from_counts(
                        self.length_cells(),
                        in_zone,
                        speed,
                    ));
                }
            }
        }
    }
}
