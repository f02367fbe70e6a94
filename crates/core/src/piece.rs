//! Piece module - a reusable handle onto one shape variant
//!
//! The board owns two pieces: one for the plane and one reused for every
//! spawn. Switching the shape is cheap; the bounding size of each variant is
//! computed the first time it is asked for and kept for the life of the piece.

use std::cell::Cell;

use crate::rng::SimpleRng;
use crate::shapes::{bad_pieces, get_cells, good_pieces, CellOffset};
use crate::types::{ShapeKind, SHAPE_COUNT};

/// A shape variant plus a per-variant bounding size cache
#[derive(Debug, Clone)]
pub struct Piece {
    shape: ShapeKind,
    /// Indexed by `ShapeKind::index()`
    bounding: [Cell<Option<(u8, u8)>>; SHAPE_COUNT],
}

impl Piece {
    /// Create a piece holding `ShapeKind::Empty`
    pub fn new() -> Self {
        Self::with_shape(ShapeKind::Empty)
    }

    pub fn with_shape(shape: ShapeKind) -> Self {
        Self {
            shape,
            bounding: Default::default(),
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }

    pub fn cells(&self) -> &'static [CellOffset] {
        get_cells(self.shape)
    }

    /// Number of occupied cells
    pub fn size(&self) -> usize {
        self.cells().len()
    }

    /// Offset of the cell at `index`
    ///
    /// Panics if `index >= self.size()`.
    pub fn cell_at(&self, index: usize) -> CellOffset {
        self.cells()[index]
    }

    pub fn x(&self, index: usize) -> i8 {
        self.cell_at(index).0
    }

    pub fn y(&self, index: usize) -> i8 {
        self.cell_at(index).1
    }

    /// Bounding size `(width, height)` of the current variant
    pub fn bounding_size(&self) -> (u8, u8) {
        let slot = &self.bounding[self.shape.index()];
        if let Some(size) = slot.get() {
            return size;
        }
        let size = ((self.max_x() + 1) as u8, (self.max_y() + 1) as u8);
        slot.set(Some(size));
        size
    }

    /// True once the bounding size of `shape` has been computed
    pub fn is_bounding_cached(&self, shape: ShapeKind) -> bool {
        self.bounding[shape.index()].get().is_some()
    }

    pub fn min_x(&self) -> i8 {
        self.cells().iter().map(|&(x, _)| x).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i8 {
        self.cells().iter().map(|&(x, _)| x).max().unwrap_or(0)
    }

    pub fn min_y(&self) -> i8 {
        self.cells().iter().map(|&(_, y)| y).min().unwrap_or(0)
    }

    pub fn max_y(&self) -> i8 {
        self.cells().iter().map(|&(_, y)| y).max().unwrap_or(0)
    }

    pub fn set_random_bad_shape(&mut self, rng: &mut SimpleRng) {
        self.set_shape(rng.choose(bad_pieces()));
    }

    pub fn set_random_good_shape(&mut self, rng: &mut SimpleRng) {
        self.set_shape(rng.choose(good_pieces()));
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::new()
    }
}
