//! Collision module - pixel-corner hit tests between a piece and the board
//!
//! Every test works the same way: take a cell the piece occupies, probe up
//! to four pixel corners of that cell's square, convert each corner to a
//! grid index by floor division with the cell size, and treat any in-bounds
//! occupied board cell as a hit. Corners outside the grid never hit; the
//! board edges are covered by the separate boundary tests, which never look
//! at board contents at all.

use pixel_tetris_types::{CELL_PX, NB_COLUMNS, NB_ROWS};

use crate::board::Board;
use crate::piece::Piece;

#[inline]
fn probe(board: &Board, px: i32, py: i32) -> bool {
    board.is_occupied(px.div_euclid(CELL_PX), py.div_euclid(CELL_PX))
}

/// True when any corner of any occupied cell overlaps a frozen cell.
/// Used after a rotation and as the final gate before freezing.
pub fn hits_ground(piece: &Piece, board: &Board) -> bool {
    let last = CELL_PX - 1;
    piece.cell_origins_px().iter().any(|&(px, py)| {
        probe(board, px, py)
            || probe(board, px + last, py)
            || probe(board, px + last, py + last)
            || probe(board, px, py + last)
    })
}

/// Leading-edge test one pixel before the piece's left edge, bottom and
/// top corners of each cell. Gates every leftward pixel step.
pub fn hits_left(piece: &Piece, board: &Board) -> bool {
    piece.cell_origins_px().iter().any(|&(px, py)| {
        probe(board, px - 1, py) || probe(board, px - 1, py + CELL_PX - 1)
    })
}

/// Leading-edge test one pixel past the piece's right edge
pub fn hits_right(piece: &Piece, board: &Board) -> bool {
    piece.cell_origins_px().iter().any(|&(px, py)| {
        probe(board, px + CELL_PX, py) || probe(board, px + CELL_PX, py + CELL_PX - 1)
    })
}

/// True when the next downward pixel step would overlap a frozen cell.
/// Probes the two bottom corners of each cell one pixel below.
pub fn hits_stack_below(piece: &Piece, board: &Board) -> bool {
    piece.cell_origins_px().iter().any(|&(px, py)| {
        probe(board, px, py - 1) || probe(board, px + CELL_PX - 1, py - 1)
    })
}

/// True when some cell's bottom edge has reached the bottom boundary of
/// row 0, so the piece cannot descend further
pub fn touches_floor(piece: &Piece) -> bool {
    piece.cell_origins_px().iter().any(|&(_, py)| py <= 0)
}

/// Pure boundary test: any cell outside the grid on either axis
pub fn is_out_of_bounds(piece: &Piece) -> bool {
    piece.cell_origins_px().iter().any(|&(px, py)| {
        let column = px.div_euclid(CELL_PX);
        let row = py.div_euclid(CELL_PX);
        column < 0 || column >= NB_COLUMNS || row < 0 || row >= NB_ROWS
    })
}

/// Any cell past the right edge of the grid
pub fn is_beyond_right_limit(piece: &Piece) -> bool {
    piece
        .cell_origins_px()
        .iter()
        .any(|&(px, _)| px.div_euclid(CELL_PX) >= NB_COLUMNS)
}

/// Any cell past the left edge of the grid
pub fn is_beyond_left_limit(piece: &Piece) -> bool {
    piece
        .cell_origins_px()
        .iter()
        .any(|&(px, _)| px.div_euclid(CELL_PX) < 0)
}

/// Attempt a clockwise rotation with horizontal boundary correction.
///
/// Returns the corrected piece on success; `None` means the rotation is
/// impossible and the caller keeps the original piece untouched. The
/// correction only ever shifts horizontally, one cell at a time toward the
/// board interior, re-testing frozen-cell overlap after the shift. The
/// shift loop is bounded by the board width; the tables make more shifts
/// unreachable, so hitting the bound means corrupted geometry.
pub fn rotated_with_correction(piece: &Piece, board: &Board) -> Option<Piece> {
    let mut rotated = *piece;
    rotated.rotate_right();

    if hits_ground(&rotated, board) {
        return None;
    }
    if is_beyond_right_limit(&rotated) {
        let mut shifts = 0;
        while is_beyond_right_limit(&rotated) {
            rotated.x -= CELL_PX;
            shifts += 1;
            if shifts > NB_COLUMNS {
                return None;
            }
        }
        if hits_ground(&rotated, board) {
            return None;
        }
    } else if is_beyond_left_limit(&rotated) {
        let mut shifts = 0;
        while is_beyond_left_limit(&rotated) {
            rotated.x += CELL_PX;
            shifts += 1;
            if shifts > NB_COLUMNS {
                return None;
            }
        }
        if hits_ground(&rotated, board) {
            return None;
        }
    }
    Some(rotated)
}
