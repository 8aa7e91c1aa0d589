//! `GridEntity`: any occupant that can be placed on the grid.

use ped_core::Cell;

use crate::{Obstacle, Pedestrian, Target};

/// Tagged union over the three kinds of grid occupant.
///
/// Models are built from a flat list of entities; the builder splits it into
/// per-kind lists, preserving the relative order of each kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridEntity {
    Pedestrian(Pedestrian),
    Obstacle(Obstacle),
    Target(Target),
}

impl GridEntity {
    #[inline]
    pub fn cell(&self) -> Cell {
        match self {
            GridEntity::Pedestrian(p) => p.cell,
            GridEntity::Obstacle(o)   => o.cell,
            GridEntity::Target(t)     => t.cell,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        match self {
            GridEntity::Pedestrian(p) => p.label(),
            GridEntity::Obstacle(o)   => o.label(),
            GridEntity::Target(t)     => t.label(),
        }
    }

    /// Only pedestrians ever change cell.
    #[inline]
    pub fn is_movable(&self) -> bool {
        matches!(self, GridEntity::Pedestrian(_))
    }

    /// Straight-line distance between two entities' cells.
    #[inline]
    pub fn distance(&self, other: &GridEntity) -> f64 {
        self.cell().distance(other.cell())
    }
}

impl From<Pedestrian> for GridEntity {
    fn from(p: Pedestrian) -> Self {
        GridEntity::Pedestrian(p)
    }
}

impl From<Obstacle> for GridEntity {
    fn from(o: Obstacle) -> Self {
        GridEntity::Obstacle(o)
    }
}

impl From<Target> for GridEntity {
    fn from(t: Target) -> Self {
        GridEntity::Target(t)
    }
}
