//! The movable grid entity and its per-run statistics.

use ped_core::Cell;

/// Prefix of every pedestrian label.  The model appends the pedestrian's
/// list index at setup, so the first pedestrian is `P0`.
pub const PEDESTRIAN_LABEL: &str = "P";

/// Progress of a pedestrian through an optional measurement zone.
///
/// All fields stay `None` unless the model was built with a zone.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedMeasurement {
    /// `steps_to_target` when the pedestrian first stood on the entry line.
    pub start_step: Option<u64>,
    /// Steps spent between the entry and the exit line.
    pub steps_in_zone: Option<u64>,
    /// Zone length over time spent, scaled by the nominal speed.
    pub measured_speed: Option<f64>,
}

/// A pedestrian walking towards the nearest target.
///
/// # Statistics
///
/// - `steps_to_target` counts every step the pedestrian took part in, whether
///   or not it moved.  It is frozen once `is_finished` is set.
/// - `moved_cells` starts at 1 (occupying the start cell counts as the first
///   move) and grows only when the pedestrian actually changes cell or enters
///   a target.
/// - `actual_speed` is fixed on arrival as
///   `moved_cells / steps_to_target * speed_meters_per_sec`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pedestrian {
    pub cell: Cell,
    /// Display label.  Unique once the model assigned the list index.
    pub name: String,
    /// Nominal walking speed.
    pub speed_meters_per_sec: f64,
    /// Informational only.
    pub age: u32,
    pub steps_to_target: u64,
    pub moved_cells: u64,
    pub actual_speed: Option<f64>,
    pub is_finished: bool,
    pub measurement: SpeedMeasurement,
}

impl Pedestrian {
    pub const DEFAULT_SPEED_MPS: f64 = 1.33;
    pub const DEFAULT_AGE: u32 = 25;

    /// A pedestrian with default speed and age at `(row, col)`.
    pub fn new(row: i32, col: i32) -> Self {
        Self::at(Cell::new(row, col))
    }

    pub fn at(cell: Cell) -> Self {
        Self {
            cell,
            name: PEDESTRIAN_LABEL.to_owned(),
            speed_meters_per_sec: Self::DEFAULT_SPEED_MPS,
            age: Self::DEFAULT_AGE,
            steps_to_target: 0,
            moved_cells: 1,
            actual_speed: None,
            is_finished: false,
            measurement: SpeedMeasurement::default(),
        }
    }

    /// Extend the base label, e.g. `"child"` gives `Pchild0` after setup.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = format!("{PEDESTRIAN_LABEL}{name}");
        self
    }

    pub fn with_speed(mut self, speed_meters_per_sec: f64) -> Self {
        self.speed_meters_per_sec = speed_meters_per_sec;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Append the list index to the label.  Called once by the model.
    pub fn assign_index(&mut self, index: usize) {
        self.name.push_str(&index.to_string());
    }

    /// Move to `cell`, counting the move only if the cell changed.
    ///
    /// Returns `true` if the pedestrian actually moved.
    pub fn move_to(&mut self, cell: Cell) -> bool {
        let moved = self.cell != cell;
        self.cell = cell;
        if moved {
            self.moved_cells += 1;
        }
        moved
    }

    /// Enter a target: count the final move and fix `actual_speed`.
    pub fn arrive(&mut self) {
        self.is_finished = true;
        self.moved_cells += 1;
        self.actual_speed = Some(Self::speed_from_counts(
            self.moved_cells,
            self.steps_to_target,
            self.speed_meters_per_sec,
        ));
    }

    /// `(cells / steps) * nominal_speed`.  Zero steps yields zero speed.
    pub fn speed_from_counts(cells: u64, steps: u64, nominal_speed: f64) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        (cells as f64 / steps as f64) * nominal_speed
    }

    /// Convenience accessor for the zone measurement.
    #[inline]
    pub fn measured_speed(&self) -> Option<f64> {
        self.measurement.measured_speed
    }
}
