//! Model configuration and grid unit conversion.
//!
//! # Units
//!
//! One grid cell is the footprint of one pedestrian: a square of
//! [`BODY_DIMENSION_M`] (1/3 m) per side.  Grid dimensions may be given either
//! directly in cells or in metres; metre dimensions are multiplied by
//! [`CELLS_PER_METER`] to obtain the cell count.

use crate::{CoreError, CoreResult};

/// Side length of one cell in metres (the body width of a pedestrian).
pub const BODY_DIMENSION_M: f64 = 1.0 / 3.0;

/// Number of cells per metre along each axis (`1 / BODY_DIMENSION_M`).
pub const CELLS_PER_METER: u32 = 3;

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Effective grid size in cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridDims {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration for one simulation run.
///
/// Applications typically build it with [`ModelConfig::cells`] or
/// [`ModelConfig::meters`] and adjust the public fields afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Grid width, in cells or metres depending on `in_meter`.
    pub grid_width: u32,

    /// Grid height, in cells or metres depending on `in_meter`.
    pub grid_height: u32,

    /// Pixels per cell for renderers.  Not used by the engine.  Default: 10.
    pub grid_unit: u32,

    /// Interpret `grid_width` / `grid_height` as metres.
    pub in_meter: bool,

    /// Remove pedestrians from the grid once they enter a target.  When
    /// `false` the pedestrian stays on its last cell as an inert occupant.
    pub disappear: bool,

    /// Step budget for `Model::run` in `ped-sim`.  A pedestrian that is boxed
    /// in never arrives, so every run needs one.
    pub max_steps: u64,

    /// Emit an observer snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,

    /// Stop early once this many consecutive steps passed without any
    /// pedestrian moving or arriving.  `None` always runs to `max_steps`.
    pub stall_steps: Option<u64>,
}

impl ModelConfig {
    /// Default step budget used by the convenience constructors.
    pub const DEFAULT_MAX_STEPS: u64 = 10_000;

    /// A config whose dimensions are given in cells.
    pub fn cells(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            grid_unit: 10,
            in_meter: false,
            disappear: true,
            max_steps: Self::DEFAULT_MAX_STEPS,
            output_interval_steps: 1,
            stall_steps: None,
        }
    }

    /// A config whose dimensions are given in metres.
    pub fn meters(width_m: u32, height_m: u32) -> Self {
        Self {
            in_meter: true,
            ..Self::cells(width_m, height_m)
        }
    }

    /// Effective grid size in cells.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if the scaled size overflows `u32`.
    pub fn grid_dims(&self) -> CoreResult<GridDims> {
        if !self.in_meter {
            return Ok(GridDims::new(self.grid_width, self.grid_height));
        }
        let scale = |v: u32, what: &str| {
            v.checked_mul(CELLS_PER_METER).ok_or_else(|| {
                CoreError::Config(format!("{what} of {v} m overflows the cell count"))
            })
        };
        Ok(GridDims::new(
            scale(self.grid_width, "grid_width")?,
            scale(self.grid_height, "grid_height")?,
        ))
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.stall_steps == Some(0) {
            return Err(CoreError::Config("stall_steps must be at least 1".into()));
        }
        self.grid_dims().map(|_| ())
    }
}
