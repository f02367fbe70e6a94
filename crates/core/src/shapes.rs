//! Shapes module - static catalog of shape variants
//!
//! Every variant has a fixed list of cell offsets from its origin and a
//! display color. Offsets are never negative, so a shape's bounding size is
//! `(max x + 1, max y + 1)`.

use crate::types::ShapeKind;

/// Offset of a single cell relative to the shape origin
pub type CellOffset = (i8, i8);

/// Color attribute as 0xRRGGBB (opaque to the simulation)
pub type ShapeColor = u32;

const EMPTY_CELLS: [CellOffset; 1] = [(0, 0)];

/// Nose points right: the column at x=3 is the tip.
const PLANE_CELLS: [CellOffset; 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (2, 0),
    (2, 1),
    (2, 2),
    (3, 1),
];

const DOUBLE_CELLS: [CellOffset; 2] = [(0, 0), (1, 0)];

const TRIPLE_CELLS: [CellOffset; 3] = [(0, 0), (1, 0), (2, 0)];

const STAR_CELLS: [CellOffset; 5] = [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)];

const I_CELLS: [CellOffset; 7] = [(0, 0), (1, 0), (2, 0), (1, 1), (1, 2), (0, 2), (2, 2)];

const RECT_HORIZONTAL_CELLS: [CellOffset; 8] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (2, 0),
    (2, 1),
    (3, 0),
    (3, 1),
];

const SQUARE_CELLS: [CellOffset; 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Shapes that award points when the plane runs into them
const GOOD_PIECES: [ShapeKind; 2] = [ShapeKind::Triple, ShapeKind::Double];

/// Shapes that end the round when the plane runs into them
const BAD_PIECES: [ShapeKind; 4] = [
    ShapeKind::Star,
    ShapeKind::I,
    ShapeKind::RectHorizontal,
    ShapeKind::Square,
];

/// Get the cell offsets for a shape
pub fn get_cells(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Empty => &EMPTY_CELLS,
        ShapeKind::Plane => &PLANE_CELLS,
        ShapeKind::Double => &DOUBLE_CELLS,
        ShapeKind::Triple => &TRIPLE_CELLS,
        ShapeKind::Star => &STAR_CELLS,
        ShapeKind::I => &I_CELLS,
        ShapeKind::RectHorizontal => &RECT_HORIZONTAL_CELLS,
        ShapeKind::Square => &SQUARE_CELLS,
    }
}

/// Get the display color for a shape
pub fn get_color(kind: ShapeKind) -> ShapeColor {
    match kind {
        ShapeKind::Empty => 0x000000,
        ShapeKind::Plane => 0x36648B,
        ShapeKind::Double => 0xFFCC00,
        ShapeKind::Triple => 0xFF9900,
        ShapeKind::Star => 0x8B7355,
        ShapeKind::I => 0x8B6969,
        ShapeKind::RectHorizontal => 0x8B2252,
        ShapeKind::Square => 0x8B3A3A,
    }
}

pub fn good_pieces() -> &'static [ShapeKind] {
    &GOOD_PIECES
}

pub fn bad_pieces() -> &'static [ShapeKind] {
    &BAD_PIECES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_origin_anchored() {
        for kind in ShapeKind::ALL {
            for &(x, y) in get_cells(kind) {
                assert!(x >= 0 && y >= 0, "{:?} has negative offset", kind);
            }
        }
    }

    #[test]
    fn piece_lists_match_classification() {
        assert!(good_pieces().iter().all(|k| k.is_good()));
        assert!(bad_pieces().iter().all(|k| k.is_bad()));
        assert_eq!(good_pieces().len() + bad_pieces().len(), 6);
    }

    #[test]
    fn cell_counts() {
        assert_eq!(get_cells(ShapeKind::Empty).len(), 1);
        assert_eq!(get_cells(ShapeKind::Plane).len(), 8);
        assert_eq!(get_cells(ShapeKind::Double).len(), 2);
        assert_eq!(get_cells(ShapeKind::Triple).len(), 3);
        assert_eq!(get_cells(ShapeKind::Star).len(), 5);
        assert_eq!(get_cells(ShapeKind::I).len(), 7);
        assert_eq!(get_cells(ShapeKind::RectHorizontal).len(), 8);
        assert_eq!(get_cells(ShapeKind::Square).len(), 4);
    }

    #[test]
    fn colors_are_distinct_for_visible_shapes() {
        let mut colors: Vec<ShapeColor> = ShapeKind::ALL[1..].iter().map(|&k| get_color(k)).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }
}
