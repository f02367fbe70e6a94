//! Board module - manages the flying field
//!
//! The board is a 30x16 grid where each cell is empty or holds the shape
//! that was placed there. Uses a flat array for cache locality and zero
//! allocation. Coordinates: (x, y) where x ranges 0..29 (left to right) and
//! y ranges 0..15 (bottom to top).
//!
//! The plane is not stored in the grid. Its anchor is kept next to it and its
//! cells are overlaid on top when rendering or checking collisions.

use arrayvec::ArrayVec;
use log::debug;

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, GOOD_PIECE_POINTS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Most plane cells that can touch the grid in one collision pass
const MAX_PLANE_CELLS: usize = 8;

/// Plane anchor at the start of a round
pub const PLANE_START: (i8, i8) = ((BOARD_WIDTH / 4) as i8, (BOARD_HEIGHT / 2) as i8);

/// Result of checking the plane against the grid after a scroll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Good cells the plane consumed (already cleared from the grid)
    pub consumed: ArrayVec<(i8, i8), MAX_PLANE_CELLS>,
    /// First bad cell hit, if any; processing stops there
    pub crashed_into: Option<(ShapeKind, i8, i8)>,
}

impl CollisionOutcome {
    /// Points the consumed cells are worth
    pub fn points(&self) -> u32 {
        self.consumed.len() as u32 * GOOD_PIECE_POINTS
    }

    pub fn crashed(&self) -> bool {
        self.crashed_into.is_some()
    }
}

/// The game board - 30 columns x 16 rows using flat array storage
#[derive(Debug, Clone)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Reused for every spawn
    piece: Piece,
    plane: Piece,
    plane_x: i8,
    plane_y: i8,
}

impl Board {
    /// Create a new empty board with the plane at its start anchor
    pub fn new() -> Self {
        Self {
            cells: [ShapeKind::Empty; BOARD_SIZE],
            piece: Piece::new(),
            plane: Piece::with_shape(ShapeKind::Plane),
            plane_x: PLANE_START.0,
            plane_y: PLANE_START.1,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(ShapeKind::Empty))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid (the plane is left where it is)
    pub fn clear(&mut self) {
        self.cells.fill(ShapeKind::Empty);
    }

    /// Count of non-empty grid cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// The piece reused for spawns (holds the last spawned shape)
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn plane(&self) -> &Piece {
        &self.plane
    }

    pub fn plane_x(&self) -> i8 {
        self.plane_x
    }

    pub fn plane_y(&self) -> i8 {
        self.plane_y
    }

    /// Put the plane back at its start anchor
    pub fn reset_plane(&mut self) {
        self.plane_x = PLANE_START.0;
        self.plane_y = PLANE_START.1;
    }

    /// Absolute grid positions covered by the plane, in shape order
    pub fn plane_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (px, py) = (self.plane_x, self.plane_y);
        self.plane.cells().iter().map(move |&(dx, dy)| (px + dx, py + dy))
    }

    /// Write `piece`'s shape into every cell it covers at (x0, y0)
    ///
    /// No clamping is done; callers pick the origin with [`Board::start_point`]
    /// and [`Board::is_overlap`]. A cell outside the grid is a broken caller and
    /// panics.
    pub fn place_piece(&mut self, piece: &Piece, x0: i8, y0: i8) {
        let kind = piece.shape();
        for &(dx, dy) in piece.cells() {
            let (x, y) = (x0 + dx, y0 + dy);
            assert!(
                self.set(x, y, kind),
                "piece cell ({}, {}) is outside the board",
                x,
                y
            );
        }
    }

    /// Check whether any cell `piece` would cover at (x0, y0) is taken
    ///
    /// Positions outside the grid count as taken.
    pub fn is_overlap(&self, piece: &Piece, x0: i8, y0: i8) -> bool {
        piece
            .cells()
            .iter()
            .any(|&(dx, dy)| !self.is_empty(x0 + dx, y0 + dy))
    }

    /// Pick a spawn origin for `piece`: flush with the right edge, random row
    ///
    /// The row is drawn from the closed range `[1, height - bounding_height]`.
    pub fn start_point(&self, piece: &Piece, rng: &mut SimpleRng) -> (i8, i8) {
        let (w, h) = piece.bounding_size();
        let x0 = BOARD_WIDTH as i8 - w as i8;
        let hi = (BOARD_HEIGHT as i8 - h as i8).max(1);
        let y0 = rng.range_inclusive(1, hi);
        (x0, y0)
    }

    /// Spawn a random bad piece at the right edge
    pub fn spawn_bad_piece(&mut self, rng: &mut SimpleRng) -> (ShapeKind, i8, i8) {
        self.piece.set_random_bad_shape(rng);
        self.spawn_current(rng)
    }

    /// Spawn a random good piece at the right edge
    pub fn spawn_good_piece(&mut self, rng: &mut SimpleRng) -> (ShapeKind, i8, i8) {
        self.piece.set_random_good_shape(rng);
        self.spawn_current(rng)
    }

    /// Place `piece` at the first free start point drawn
    ///
    /// Retries until a free origin is found. The right edge is only ever
    /// sparsely filled at the spawn cadence, so this terminates quickly.
    pub fn spawn_piece(&mut self, piece: &Piece, rng: &mut SimpleRng) -> (i8, i8) {
        let (x0, y0) = self.free_start_point(piece, rng);
        self.place_piece(piece, x0, y0);
        debug!("spawned {} at ({}, {})", piece.shape().as_str(), x0, y0);
        (x0, y0)
    }

    fn free_start_point(&self, piece: &Piece, rng: &mut SimpleRng) -> (i8, i8) {
        loop {
            let (x0, y0) = self.start_point(piece, rng);
            if !self.is_overlap(piece, x0, y0) {
                return (x0, y0);
            }
        }
    }

    /// [`Board::spawn_piece`] with the board's own spawn piece
    fn spawn_current(&mut self, rng: &mut SimpleRng) -> (ShapeKind, i8, i8) {
        let piece = std::mem::take(&mut self.piece);
        let (x0, y0) = self.spawn_piece(&piece, rng);
        let kind = piece.shape();
        self.piece = piece;
        (kind, x0, y0)
    }

    /// Scroll every column one step to the left
    ///
    /// Column `x` takes the content of column `x + 1`; the rightmost column
    /// becomes empty. Whatever lands in column 0 is dropped, so pieces fade
    /// out at the left edge.
    pub fn move_board(&mut self) {
        let width = BOARD_WIDTH as usize;

        for row in self.cells.chunks_exact_mut(width) {
            row.copy_within(1..width, 0);
            row[width - 1] = ShapeKind::Empty;
            row[0] = ShapeKind::Empty;
        }
    }

    /// Check the plane's cells against the grid
    ///
    /// Good cells are consumed for points. The first bad cell stops the pass.
    pub fn resolve_collisions(&mut self) -> CollisionOutcome {
        let mut outcome = CollisionOutcome::default();
        let (px, py) = (self.plane_x, self.plane_y);

        for &(dx, dy) in self.plane.cells() {
            let (x, y) = (px + dx, py + dy);
            let Some(shape) = self.get(x, y) else {
                continue;
            };

            if shape.is_good() {
                outcome.consumed.push((x, y));
                self.set(x, y, ShapeKind::Empty);
            } else if shape.is_bad() {
                outcome.crashed_into = Some((shape, x, y));
                break;
            }
        }

        outcome
    }

    /// Move the plane anchor to (new_x, new_y) if every plane cell stays inside
    ///
    /// Grid content is not consulted; collisions are settled on the next scroll.
    pub fn try_move_plane(&mut self, new_x: i8, new_y: i8) -> bool {
        let min_x = new_x as i16 + self.plane.min_x() as i16;
        let max_x = new_x as i16 + self.plane.max_x() as i16;
        let min_y = new_y as i16 + self.plane.min_y() as i16;
        let max_y = new_y as i16 + self.plane.max_y() as i16;

        if min_x < 0 || max_x >= BOARD_WIDTH as i16 || min_y < 0 || max_y >= BOARD_HEIGHT as i16 {
            return false;
        }

        self.plane_x = new_x;
        self.plane_y = new_y;
        true
    }

    /// Write the grid as rows (index 0 = bottom row)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in self.cells.chunks_exact(width).enumerate() {
            out[y].copy_from_slice(row);
        }
    }

    /// Create from rows for testing (index 0 = bottom row)
    #[cfg(test)]
    pub fn from_rows(rows: &[[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(29, 0), Some(29));
        assert_eq!(Board::index(0, 1), Some(30));
        assert_eq!(Board::index(29, 15), Some(479));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(30, 0), None);
        assert_eq!(Board::index(0, 16), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, ShapeKind::Star);
        board.set(5, 10, ShapeKind::Double);

        assert_eq!(board.cells[0], ShapeKind::Star);
        assert_eq!(board.cells[10 * 30 + 5], ShapeKind::Double);
    }

    #[test]
    fn test_from_rows_and_write_grid_agree() {
        let mut rows = [[ShapeKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        rows[3][7] = ShapeKind::Square;
        rows[15][29] = ShapeKind::Triple;

        let board = Board::from_rows(&rows);
        assert_eq!(board.get(7, 3), Some(ShapeKind::Square));

        let mut out = [[ShapeKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_grid(&mut out);
        assert_eq!(out, rows);
    }

    #[test]
    fn test_start_point_is_flush_right_and_in_range() {
        let board = Board::new();
        let mut rng = SimpleRng::new(5);
        let mut piece = Piece::new();

        for kind in ShapeKind::ALL[2..].iter().copied() {
            piece.set_shape(kind);
            let (w, h) = piece.bounding_size();
            for _ in 0..100 {
                let (x0, y0) = board.start_point(&piece, &mut rng);
                assert_eq!(x0, 30 - w as i8);
                assert!(y0 >= 1 && y0 <= 16 - h as i8, "{:?} y0={}", kind, y0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_place_piece_outside_panics() {
        let mut board = Board::new();
        let piece = Piece::with_shape(ShapeKind::Square);
        board.place_piece(&piece, 29, 0);
    }

    #[test]
    fn test_own_spawn_piece_goes_through_spawn_piece() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(17);

        let (kind, x0, y0) = board.spawn_bad_piece(&mut rng);
        // The spawn piece comes back with its shape and size cache.
        assert_eq!(board.piece().shape(), kind);
        assert!(board.piece().is_bounding_cached(kind));

        let mut expected = Board::new();
        let mut replay = SimpleRng::new(17);
        let piece = Piece::with_shape(replay.choose(crate::shapes::bad_pieces()));
        assert_eq!(piece.shape(), kind);
        assert_eq!(expected.spawn_piece(&piece, &mut replay), (x0, y0));
        assert_eq!(expected.cells(), board.cells());
    }

    #[test]
    fn test_collision_stops_at_first_bad_cell() {
        let mut board = Board::new();
        // Plane cells at anchor (7,8): (7,8) (7,9) (7,10) (8,9) (9,8) ...
        board.set(7, 8, ShapeKind::Double);
        board.set(7, 9, ShapeKind::Star);
        board.set(7, 10, ShapeKind::Triple);

        let outcome = board.resolve_collisions();
        assert_eq!(outcome.consumed.as_slice(), &[(7, 8)]);
        assert_eq!(outcome.points(), GOOD_PIECE_POINTS);
        assert_eq!(outcome.crashed_into, Some((ShapeKind::Star, 7, 9)));
        // Cells past the crash are untouched.
        assert_eq!(board.get(7, 10), Some(ShapeKind::Triple));
        assert_eq!(board.get(7, 9), Some(ShapeKind::Star));
    }
}
