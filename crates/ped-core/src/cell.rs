//! Grid coordinate type and neighbourhood utilities.
//!
//! `Cell` is a plain `(row, col)` value.  Rows grow downwards and columns grow
//! to the right, matching the row-major layout of the occupancy grid.  The
//! components are signed so that the neighbour of a border cell is still a
//! representable (out-of-bounds) coordinate; the grid rejects it instead of
//! the arithmetic wrapping around.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned moves a pedestrian can make in one step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The order in which the move evaluator visits neighbours.  Ties between
    /// equally good candidates go to the earlier direction.
    pub const EVALUATION_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// `(d_row, d_col)` offset of this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left  => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up    => (-1, 0),
            Direction::Down  => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "left",
            Direction::Right => "right",
            Direction::Up    => "up",
            Direction::Down  => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A single addressable grid position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one unit away in `direction`.  May lie outside the grid.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Cell {
        let (dr, dc) = direction.offset();
        Cell::new(self.row + dr, self.col + dc)
    }

    /// All four neighbours in [`Direction::EVALUATION_ORDER`].
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Cell)> {
        Direction::EVALUATION_ORDER
            .into_iter()
            .map(move |d| (d, self.neighbor(d)))
    }

    /// Straight-line (Euclidean) distance in cell units.  Obstacles in between
    /// are not considered.
    #[inline]
    pub fn distance(self, other: Cell) -> f64 {
        let dr = f64::from(other.row - self.row);
        let dc = f64::from(other.col - self.col);
        (dr * dr + dc * dc).sqrt()
    }

    /// `true` if the cell lies in `[0, height) × [0, width)`.
    #[inline]
    pub fn is_within(self, height: u32, width: u32) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as u32) < height
            && (self.col as u32) < width
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
