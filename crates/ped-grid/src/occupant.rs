//! Typed reference to the entity occupying a cell.

use std::fmt;

use ped_core::{ObstacleId, PedestrianId, TargetId};

/// What occupies a grid cell.  The ID indexes into the owning model's list
/// for that entity kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Pedestrian(PedestrianId),
    Obstacle(ObstacleId),
    Target(TargetId),
}

impl Occupant {
    #[inline]
    pub fn is_pedestrian(self) -> bool {
        matches!(self, Occupant::Pedestrian(_))
    }

    #[inline]
    pub fn is_target(self) -> bool {
        matches!(self, Occupant::Target(_))
    }

    /// Short kind name used in logs and CSV columns.
    pub fn kind(self) -> &'static str {
        match self {
            Occupant::Pedestrian(_) => "pedestrian",
            Occupant::Obstacle(_)   => "obstacle",
            Occupant::Target(_)     => "target",
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Pedestrian(id) => write!(f, "{id}"),
            Occupant::Obstacle(id)   => write!(f, "{id}"),
            Occupant::Target(id)     => write!(f, "{id}"),
        }
    }
}
