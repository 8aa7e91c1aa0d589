//! Immovable grid entities.

use ped_core::Cell;

/// Grid label of every obstacle.
pub const OBSTACLE_LABEL: &str = "O";

/// Grid label of every target.
pub const TARGET_LABEL: &str = "T";

/// A cell no pedestrian may enter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub cell: Cell,
}

impl Obstacle {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { cell: Cell::new(row, col) }
    }

    /// Obstacles covering the straight segment `from..=to`.
    ///
    /// The segment must be horizontal or vertical; a diagonal pair yields the
    /// bounding rectangle instead, which is what callers building walls and
    /// blocks usually want anyway.
    pub fn line(from: Cell, to: Cell) -> Vec<Obstacle> {
        let (r0, r1) = (from.row.min(to.row), from.row.max(to.row));
        let (c0, c1) = (from.col.min(to.col), from.col.max(to.col));
        (r0..=r1)
            .flat_map(|row| (c0..=c1).map(move |col| Obstacle::new(row, col)))
            .collect()
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        OBSTACLE_LABEL
    }
}

/// A cell pedestrians walk towards.  Entering it ends their run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub cell: Cell,
}

impl Target {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { cell: Cell::new(row, col) }
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        TARGET_LABEL
    }
}
