//! Plain result types produced by the model.

use std::fmt;

use ped_core::{Cell, PedestrianId, Step};
use ped_grid::Occupant;

/// Two initial entities claimed the same cell; the later one won.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacementConflict {
    pub cell:        Cell,
    /// The earlier occupant whose grid marker was overwritten.
    pub overwritten: Occupant,
    /// The occupant now holding the cell.
    pub by:          Occupant,
}

impl fmt::Display for PlacementConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overwrote {} at {}", self.by, self.overwritten, self.cell)
    }
}

/// What happened during one call to [`Model::step`](crate::Model::step).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The step that was executed (0-based).
    pub step:    Step,
    /// Pedestrians that were unfinished at the start of the step.
    pub active:  usize,
    /// Pedestrians that changed cell without arriving.
    pub moved:   usize,
    /// The single pedestrian credited with an arrival, if any.
    pub arrived: Option<PedestrianId>,
    /// Pedestrians whose best move was a target already claimed this step.
    pub waiting: usize,
}

impl StepReport {
    /// `true` if any pedestrian moved or arrived.
    #[inline]
    pub fn made_progress(&self) -> bool {
        self.moved > 0 || self.arrived.is_some()
    }
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every pedestrian reached a target.
    AllFinished { steps: u64 },
    /// The step budget ran out first.
    BudgetExhausted { steps: u64, unfinished: Vec<PedestrianId> },
    /// Nobody moved or arrived for `ModelConfig::stall_steps` consecutive steps.
    Stalled { steps: u64, unfinished: Vec<PedestrianId> },
}

impl RunOutcome {
    /// Steps executed during the run.
    pub fn steps(&self) -> u64 {
        match self {
            RunOutcome::AllFinished { steps }
            | RunOutcome::BudgetExhausted { steps, .. }
            | RunOutcome::Stalled { steps, .. } => *steps,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, RunOutcome::AllFinished { .. })
    }

    /// Pedestrians still walking when the run stopped.
    pub fn unfinished(&self) -> &[PedestrianId] {
        match self {
            RunOutcome::AllFinished { .. } => &[],
            RunOutcome::BudgetExhausted { unfinished, .. }
            | RunOutcome::Stalled { unfinished, .. } => unfinished,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunOutcome::AllFinished { .. }     => "all_finished",
            RunOutcome::BudgetExhausted { .. } => "budget_exhausted",
            RunOutcome::Stalled { .. }         => "stalled",
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} after {} steps", self.as_str(), self.steps())?;
        let unfinished = self.unfinished().len();
        if unfinished > 0 {
            write!(f, " ({unfinished} unfinished)")?;
        }
        Ok(())
    }
}
