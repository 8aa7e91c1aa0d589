//! The occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<Option<Occupant>>`:
//!
//! ```text
//! cells[ row * width + col ]
//! ```
//!
//! Coordinates use signed components (see [`Cell`]), so every lookup first
//! checks `[0, height) × [0, width)`.  [`Grid::is_empty`] is the validity test
//! the move evaluator relies on: out-of-bounds cells are never empty.

use ped_core::{Cell, GridDims};

use crate::{GridError, GridResult, Occupant};

/// Label rendered for an unoccupied cell.
pub const EMPTY_LABEL: &str = " ";

/// Rectangular occupancy map: `height` rows × `width` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims:  GridDims,
    cells: Vec<Option<Occupant>>,
}

impl Grid {
    /// An all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either side is zero.
    pub fn new(dims: GridDims) -> GridResult<Self> {
        if dims.width == 0 || dims.height == 0 {
            return Err(GridError::InvalidDimensions {
                height: dims.height,
                width:  dims.width,
            });
        }
        Ok(Self {
            dims,
            cells: vec![None; dims.cell_count()],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.dims.height, self.dims.width)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.dims.width as usize + cell.col as usize)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The occupant of `cell`, or `None` if it is empty or out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Occupant> {
        self.index(cell).and_then(|i| self.cells[i])
    }

    /// `true` only for an in-bounds cell with no occupant.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.index(cell), Some(i) if self.cells[i].is_none())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, Occupant)> + '_ {
        let width = self.dims.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, occ)| {
            occ.map(|o| (Cell::new((i / width) as i32, (i % width) as i32), o))
        })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Write `occupant` into `cell`, returning whatever was there before.
    ///
    /// Callers validate the cell first; the engine only ever passes cells it
    /// obtained from [`is_empty`](Self::is_empty) or from an existing
    /// occupant.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn place(&mut self, cell: Cell, occupant: Occupant) -> Option<Occupant> {
        let i = self.index_or_panic(cell);
        self.cells[i].replace(occupant)
    }

    /// Empty `cell`, returning its previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn clear(&mut self, cell: Cell) -> Option<Occupant> {
        let i = self.index_or_panic(cell);
        self.cells[i].take()
    }

    /// Bounds-checked [`place`](Self::place) for untrusted input.
    pub fn try_place(&mut self, cell: Cell, occupant: Occupant) -> GridResult<Option<Occupant>> {
        match self.index(cell) {
            Some(i) => Ok(self.cells[i].replace(occupant)),
            None => Err(self.out_of_bounds(cell)),
        }
    }

    /// Render every cell through `label`, one `Vec` per row.  Empty cells
    /// become [`EMPTY_LABEL`].
    pub fn labels_with<F>(&self, mut label: F) -> Vec<Vec<String>>
    where
        F: FnMut(Occupant) -> String,
    {
        self.cells
            .chunks(self.dims.width as usize)
            .map(|row| {
                row.iter()
                    .map(|occ| match occ {
                        Some(o) => label(*o),
                        None    => EMPTY_LABEL.to_owned(),
                    })
                    .collect()
            })
            .collect()
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds {
            cell,
            height: self.dims.height,
            width:  self.dims.width,
        }
    }

    fn index_or_panic(&self, cell: Cell) -> usize {
        match self.index(cell) {
            Some(i) => i,
            None => panic!("{}", self.out_of_bounds(cell)),
        }
    }
}
