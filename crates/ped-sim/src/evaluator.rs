//! Greedy local move evaluation.
//!
//! A pedestrian only ever looks at its four neighbours.  A neighbour is a
//! candidate if it is an empty in-bounds cell and strictly closer (straight
//! line) to some target than the best distance found so far.  There is no
//! path search: a pedestrian facing a wall with no improving side step stays
//! where it is.

use ped_core::{Cell, Direction, TargetId};
use ped_entity::Target;
use ped_grid::Grid;

/// The move chosen for one pedestrian in one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveProposal {
    /// No neighbour improves on the current position.
    Stay,
    /// Walk into an empty neighbouring cell.
    Step { to: Cell, direction: Direction },
    /// The neighbour in `direction` is a target cell.
    Enter { target: TargetId, cell: Cell, direction: Direction },
}

impl MoveProposal {
    /// The cell the pedestrian would occupy after the move.
    #[inline]
    pub fn destination(self, from: Cell) -> Cell {
        match self {
            MoveProposal::Stay               => from,
            MoveProposal::Step { to, .. }    => to,
            MoveProposal::Enter { cell, .. } => cell,
        }
    }

    #[inline]
    pub fn is_target(self) -> bool {
        matches!(self, MoveProposal::Enter { .. })
    }
}

/// Pick the best move for a pedestrian standing on `from`.
///
/// The distance threshold is seeded once from `targets[0]` and shared by all
/// targets: a neighbour only wins if it is closer to *its* target than the
/// best distance seen so far, starting from the distance to the first target.
/// Targets are visited in list order and, inside each target, neighbours in
/// [`Direction::EVALUATION_ORDER`]; the first strictly better candidate wins
/// ties.  A neighbour that *is* the target being visited is taken
/// unconditionally, without lowering the threshold, so a later target can
/// still replace it with a strictly closer step.
///
/// With no targets the pedestrian stays put.
pub fn find_shortest_move(from: Cell, targets: &[Target], grid: &Grid) -> MoveProposal {
    let Some(first) = targets.first() else {
        return MoveProposal::Stay;
    };

    let mut threshold = from.distance(first.cell);
    let mut best = MoveProposal::Stay;

    for (i, target) in targets.iter().enumerate() {
        for (direction, neighbor) in from.neighbors() {
            if neighbor == target.cell {
                best = MoveProposal::Enter {
                    target: TargetId(i as u32),
                    cell:   neighbor,
                    direction,
                };
            } else if grid.is_empty(neighbor) {
                let d = neighbor.distance(target.cell);
                if d < threshold {
                    threshold = d;
                    best = MoveProposal::Step { to: neighbor, direction };
                }
            }
        }
    }

    best
}
