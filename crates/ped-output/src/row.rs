//! Plain data row types written by output backends.

use ped_entity::Pedestrian;

/// Position and progress of one pedestrian at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedestrianSnapshotRow {
    pub pedestrian_id: u32,
    pub step:          u64,
    pub row:           i32,
    pub col:           i32,
    pub is_finished:   bool,
    pub moved_cells:   u64,
}

impl PedestrianSnapshotRow {
    pub fn new(pedestrian_id: u32, step: u64, p: &Pedestrian) -> Self {
        Self {
            pedestrian_id,
            step,
            row:         p.cell.row,
            col:         p.cell.col,
            is_finished: p.is_finished,
            moved_cells: p.moved_cells,
        }
    }
}

/// Counters for one executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:    u64,
    pub active:  u64,
    pub moved:   u64,
    /// Pedestrian credited with this step's arrival.
    pub arrived: Option<u32>,
    pub waiting: u64,
}

/// Final statistics of one pedestrian, written once when the run ends.
#[derive(Debug, Clone, PartialEq)]
pub struct PedestrianStatsRow {
    pub pedestrian_id:   u32,
    pub name:            String,
    pub age:             u32,
    pub nominal_speed:   f64,
    pub steps_to_target: u64,
    pub moved_cells:     u64,
    pub actual_speed:    Option<f64>,
    pub measured_speed:  Option<f64>,
    pub is_finished:     bool,
}

impl PedestrianStatsRow {
    pub fn new(pedestrian_id: u32, p: &Pedestrian) -> Self {
        Self {
            pedestrian_id,
            name:            p.name.clone(),
            age:             p.age,
            nominal_speed:   p.speed_meters_per_sec,
            steps_to_target: p.steps_to_target,
            moved_cells:     p.moved_cells,
            actual_speed:    p.actual_speed,
            measured_speed:  p.measured_speed(),
            is_finished:     p.is_finished,
        }
    }
}
