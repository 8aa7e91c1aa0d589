//! The `Model` struct and its step loop.

use ped_core::{Cell, ModelConfig, PedestrianId, Step};
use ped_entity::{Obstacle, Pedestrian, Target, OBSTACLE_LABEL, TARGET_LABEL};
use ped_grid::{Grid, Occupant};
use tracing::{debug, info};

use crate::{
    find_shortest_move, MeasurementZone, MoveProposal, NoopObserver, PlacementConflict,
    RunOutcome, SimObserver, StepReport,
};

/// The simulation: the occupancy grid plus the three entity lists, owned for
/// the whole run.
///
/// Entities are placed once by [`ModelBuilder`](crate::ModelBuilder) and
/// never added or removed afterwards.  Finished pedestrians stay in the list
/// with `is_finished = true`; only their grid marker may disappear.
///
/// # Invariants
///
/// - Every unfinished pedestrian's cell holds that pedestrian's marker.
/// - A cell holds at most one occupant, so no two unfinished pedestrians
///   ever share a cell.
/// - At most one pedestrian arrives per step.
pub struct Model {
    pub(crate) config:      ModelConfig,
    pub(crate) grid:        Grid,
    pub(crate) pedestrians: Vec<Pedestrian>,
    pub(crate) obstacles:   Vec<Obstacle>,
    pub(crate) targets:     Vec<Target>,
    pub(crate) zone:        Option<MeasurementZone>,
    pub(crate) conflicts:   Vec<PlacementConflict>,

    /// The next step to execute; equals the number of steps executed so far.
    pub(crate) current_step: Step,
}

impl Model {
    // ── Queries ───────────────────────────────────────────────────────────

    /// Configuration the model was built with.  Read-only: the grid was
    /// sized and populated from it.
    #[inline]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn pedestrians(&self) -> &[Pedestrian] {
        &self.pedestrians
    }

    #[inline]
    pub fn pedestrian(&self, id: PedestrianId) -> Option<&Pedestrian> {
        self.pedestrians.get(id.index())
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[inline]
    pub fn measurement_zone(&self) -> Option<&MeasurementZone> {
        self.zone.as_ref()
    }

    /// Overlapping initial placements, in placement order.  Empty unless two
    /// entities were given the same cell.
    #[inline]
    pub fn placement_conflicts(&self) -> &[PlacementConflict] {
        &self.conflicts
    }

    /// Number of steps executed so far.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// `true` once every pedestrian has entered a target.  Vacuously `true`
    /// for a model without pedestrians.
    pub fn all_finished(&self) -> bool {
        self.pedestrians.iter().all(|p| p.is_finished)
    }

    /// IDs of pedestrians that have not arrived yet, in list order.
    pub fn unfinished(&self) -> Vec<PedestrianId> {
        self.pedestrians
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finished)
            .map(|(i, _)| PedestrianId(i as u32))
            .collect()
    }

    /// `true` if `cell` is inside the grid and unoccupied.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.grid.is_empty(cell)
    }

    /// The move pedestrian `id` would make if it were processed now.
    ///
    /// Returns `None` for an unknown ID.  Finished pedestrians are evaluated
    /// too, although the step loop never asks for them.
    pub fn find_shortest_move(&self, id: PedestrianId) -> Option<MoveProposal> {
        self.pedestrian(id)
            .map(|p| find_shortest_move(p.cell, &self.targets, &self.grid))
    }

    /// The grid rendered as labels (`P<name><index>`, `O`, `T`, or a blank),
    /// one `Vec` per row.
    pub fn grid_labels(&self) -> Vec<Vec<String>> {
        self.grid.labels_with(|occ| match occ {
            Occupant::Pedestrian(id) => self.pedestrians[id.index()].name.clone(),
            Occupant::Obstacle(_)    => OBSTACLE_LABEL.to_owned(),
            Occupant::Target(_)      => TARGET_LABEL.to_owned(),
        })
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Execute one step over all unfinished pedestrians.
    pub fn step(&mut self) -> StepReport {
        self.step_observed(&mut NoopObserver)
    }

    /// Step until everyone arrived or `max_steps` steps were executed.
    pub fn simulate(&mut self, max_steps: u64) -> RunOutcome {
        self.run_for(max_steps, &mut NoopObserver)
    }

    /// Step with observer callbacks, bounded by `config.max_steps`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        self.run_for(self.config.max_steps, observer)
    }

    /// Step with observer callbacks until everyone arrived, `max_steps`
    /// steps were executed by this call, or the model stalled (see
    /// `ModelConfig::stall_steps`).
    pub fn run_for<O: SimObserver>(&mut self, max_steps: u64, observer: &mut O) -> RunOutcome {
        let interval   = self.config.output_interval_steps;
        let mut steps  = 0u64;
        let mut idle   = 0u64;

        let outcome = loop {
            if self.all_finished() {
                break RunOutcome::AllFinished { steps };
            }
            if steps >= max_steps {
                break RunOutcome::BudgetExhausted { steps, unfinished: self.unfinished() };
            }

            let now = self.current_step;
            observer.on_step_start(now);
            let report = self.step_observed(observer);
            observer.on_step_end(&report);
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_snapshot(now, &self.pedestrians);
            }
            steps += 1;

            idle = if report.made_progress() { 0 } else { idle + 1 };
            if let Some(window) = self.config.stall_steps {
                if idle >= window && !self.all_finished() {
                    break RunOutcome::Stalled { steps, unfinished: self.unfinished() };
                }
            }
        };

        info!(
            outcome  = outcome.as_str(),
            steps    = outcome.steps(),
            finished = self.pedestrians.len() - outcome.unfinished().len(),
            total    = self.pedestrians.len(),
            "simulation run ended"
        );
        observer.on_run_end(&outcome, &self.pedestrians);
        outcome
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> StepReport {
        let now = self.current_step;
        let mut report = StepReport {
            step:    now,
            active:  0,
            moved:   0,
            arrived: None,
            waiting: 0,
        };

        // Pedestrians are walked in list order and the grid is updated in
        // place; earlier moves in this step are visible to later pedestrians.
        for i in 0..self.pedestrians.len() {
            if self.pedestrians[i].is_finished {
                continue;
            }
            report.active += 1;
            let id = PedestrianId(i as u32);

            self.pedestrians[i].steps_to_target += 1;
            let from = self.pedestrians[i].cell;

            match find_shortest_move(from, &self.targets, &self.grid) {
                MoveProposal::Enter { target, .. } => {
                    // One arrival slot per step, shared by all pedestrians.
                    if report.arrived.is_some() {
                        report.waiting += 1;
                        continue;
                    }
                    let p = &mut self.pedestrians[i];
                    p.arrive();
                    if self.config.disappear {
                        self.grid.clear(from);
                    }
                    report.arrived = Some(id);
                    debug!(
                        step       = now.0,
                        pedestrian = %p.name,
                        %target,
                        steps      = p.steps_to_target,
                        moved      = p.moved_cells,
                        speed      = p.actual_speed,
                        "pedestrian arrived"
                    );
                    observer.on_arrival(now, id, &self.pedestrians[i]);
                }
                proposal => {
                    let to = proposal.destination(from);
                    self.grid.clear(from);
                    self.grid.place(to, Occupant::Pedestrian(id));
                    let p = &mut self.pedestrians[i];
                    if p.move_to(to) {
                        report.moved += 1;
                    }
                    if let Some(zone) = &self.zone {
                        zone.observe(p);
                    }
                }
            }
        }

        self.current_step = now.next();
        report
    }
}
