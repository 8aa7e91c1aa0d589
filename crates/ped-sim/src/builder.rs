//! Fluent builder for constructing a [`Model`].

use ped_core::{Cell, ModelConfig, ObstacleId, PedestrianId, SimRng, Step, TargetId};
use ped_entity::{GridEntity, Obstacle, Pedestrian, Target};
use ped_grid::{Grid, GridError, Occupant};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{MeasurementZone, Model, PlacementConflict, SimError, SimResult};

/// Fluent builder for [`Model`].
///
/// # Required inputs
///
/// - [`ModelConfig`]: grid size, units, disappearance, step budget, …
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                          |
/// |-----------------------------|----------------------------------|
/// | `.pedestrian(p)` / `.pedestrians(v)` | none                    |
/// | `.obstacle(o)` / `.obstacles(v)`     | none                    |
/// | `.target(t)` / `.targets(v)`         | none                    |
/// | `.entities(v)`              | splits a mixed list by kind      |
/// | `.measurement_zone(z)`      | no speed measurement             |
/// | `.strict_placement(b)`      | `false` (last writer wins)       |
///
/// Each builder owns fresh lists, so models never share entity storage.
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(ModelConfig::cells(5, 5))
///     .pedestrian(Pedestrian::new(0, 0))
///     .obstacles(Obstacle::line(Cell::new(1, 0), Cell::new(1, 3)))
///     .target(Target::new(0, 4))
///     .build()?;
/// ```
pub struct ModelBuilder {
    config:      ModelConfig,
    pedestrians: Vec<Pedestrian>,
    obstacles:   Vec<Obstacle>,
    targets:     Vec<Target>,
    zone:        Option<MeasurementZone>,
    strict:      bool,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            pedestrians: Vec::new(),
            obstacles:   Vec::new(),
            targets:     Vec::new(),
            zone:        None,
            strict:      false,
        }
    }

    pub fn pedestrian(mut self, pedestrian: Pedestrian) -> Self {
        self.pedestrians.push(pedestrian);
        self
    }

    /// Append pedestrians.  List order is processing order within a step and
    /// determines the index suffix of each name.
    pub fn pedestrians(mut self, pedestrians: impl IntoIterator<Item = Pedestrian>) -> Self {
        self.pedestrians.extend(pedestrians);
        self
    }

    pub fn obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn obstacles(mut self, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Append targets.  The first target seeds the move evaluator's distance
    /// threshold.
    pub fn targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets.extend(targets);
        self
    }

    /// Append a mixed entity list, keeping the relative order of each kind.
    pub fn entities(mut self, entities: impl IntoIterator<Item = GridEntity>) -> Self {
        for entity in entities {
            match entity {
                GridEntity::Pedestrian(p) => self.pedestrians.push(p),
                GridEntity::Obstacle(o)   => self.obstacles.push(o),
                GridEntity::Target(t)     => self.targets.push(t),
            }
        }
        self
    }

    pub fn measurement_zone(mut self, zone: MeasurementZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Fail [`build`](Self::build) instead of silently overwriting when two
    /// entities share a cell.
    pub fn strict_placement(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add `count` default pedestrians on distinct random cells of the
    /// rectangle spanned by `corner_a` and `corner_b` (inclusive).
    ///
    /// Cells outside the grid or already used by an entity added so far are
    /// skipped, so call this after adding obstacles and targets.  The list
    /// order of the new pedestrians is random as well.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the rectangle has fewer than `count`
    /// free cells, or the grid configuration is invalid.
    pub fn scatter_pedestrians(
        mut self,
        corner_a: Cell,
        corner_b: Cell,
        count:    usize,
        rng:      &mut SimRng,
    ) -> SimResult<Self> {
        let dims = self.config.grid_dims()?;
        let taken: FxHashSet<Cell> = self
            .pedestrians
            .iter()
            .map(|p| p.cell)
            .chain(self.obstacles.iter().map(|o| o.cell))
            .chain(self.targets.iter().map(|t| t.cell))
            .collect();

        // Clip the rectangle to the grid so only in-bounds cells are visited.
        let last = |n: u32| i32::try_from(n).unwrap_or(i32::MAX) - 1;
        let r0 = corner_a.row.min(corner_b.row).max(0);
        let r1 = corner_a.row.max(corner_b.row).min(last(dims.height));
        let c0 = corner_a.col.min(corner_b.col).max(0);
        let c1 = corner_a.col.max(corner_b.col).min(last(dims.width));
        let mut free: Vec<Cell> = (r0..=r1)
            .flat_map(|row| (c0..=c1).map(move |col| Cell::new(row, col)))
            .filter(|c| !taken.contains(c))
            .collect();

        if free.len() < count {
            return Err(SimError::Config(format!(
                "cannot scatter {count} pedestrians over {} free cells between {corner_a} and {corner_b}",
                free.len()
            )));
        }

        rng.shuffle(&mut free);
        self.pedestrians
            .extend(free.into_iter().take(count).map(Pedestrian::at));
        Ok(self)
    }

    /// Validate inputs, name the pedestrians, populate the grid, and return a
    /// ready-to-step [`Model`].
    ///
    /// Placement order is pedestrians, then obstacles, then targets.  A later
    /// entity on an already occupied cell overwrites the earlier marker; each
    /// overwrite is recorded in [`Model::placement_conflicts`] and logged, or
    /// rejected with [`strict_placement`](Self::strict_placement).
    pub fn build(self) -> SimResult<Model> {
        self.config.validate()?;
        let mut grid = Grid::new(self.config.grid_dims()?)?;

        // ── Name pedestrians by list index ────────────────────────────────
        let mut pedestrians = self.pedestrians;
        for (i, p) in pedestrians.iter_mut().enumerate() {
            p.assign_index(i);
        }

        // ── Populate the grid ─────────────────────────────────────────────
        let placements = pedestrians
            .iter()
            .enumerate()
            .map(|(i, p)| (p.cell, Occupant::Pedestrian(PedestrianId(i as u32))))
            .chain(self.obstacles.iter().enumerate().map(|(i, o)| {
                (o.cell, Occupant::Obstacle(ObstacleId(i as u32)))
            }))
            .chain(self.targets.iter().enumerate().map(|(i, t)| {
                (t.cell, Occupant::Target(TargetId(i as u32)))
            }));

        let mut conflicts = Vec::new();
        for (cell, occupant) in placements {
            let previous = grid.try_place(cell, occupant).map_err(|e| match e {
                GridError::OutOfBounds { cell, height, width } => {
                    SimError::OutOfBounds { occupant, cell, height, width }
                }
                other => SimError::Grid(other),
            })?;
            if let Some(overwritten) = previous {
                let conflict = PlacementConflict { cell, overwritten, by: occupant };
                warn!(%cell, %overwritten, by = %occupant, "overlapping initial placement");
                conflicts.push(conflict);
            }
        }

        if self.strict {
            if let Some(&first) = conflicts.first() {
                return Err(SimError::PlacementConflicts { count: conflicts.len(), first });
            }
        }

        // Pedestrians starting on the entry row start their clock at step 0.
        if let Some(zone) = &self.zone {
            for p in pedestrians.iter_mut() {
                zone.observe(p);
            }
        }

        debug!(
            width       = grid.width(),
            height      = grid.height(),
            pedestrians = pedestrians.len(),
            obstacles   = self.obstacles.len(),
            targets     = self.targets.len(),
            conflicts   = conflicts.len(),
            "model built"
        );

        Ok(Model {
            config:       self.config,
            grid,
            pedestrians,
            obstacles:    self.obstacles,
            targets:      self.targets,
            zone:         self.zone,
            conflicts,
            current_step: Step::ZERO,
        })
    }
}
