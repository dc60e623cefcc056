//! Piece module - tetromino geometry and position state
//!
//! A piece is four cell offsets around an anchor, plus a position in pixel
//! units. Rotation mutates the offsets in place; there is no separate
//! rotation counter, so four same-direction rotations restore the original
//! offsets. The position moves one pixel at a time while falling or
//! sliding and is only cell-aligned at spawn, at rest, and at freeze time.

use pixel_tetris_types::{Rgba, Shape, CELL_PX};

/// Relative cell offsets for each shape id, anchor at (0, 0).
/// Index 0 is the inert placeholder shape (all offsets zero).
const SHAPE_CELLS: [[(i32, i32); 4]; 8] = [
    [(0, 0), (0, 0), (0, 0), (0, 0)],
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(1, -1), (0, -1), (0, 0), (0, 1)],
];

/// Base (unrotated) cell offsets for a shape
pub fn shape_cells(shape: Shape) -> [(i32, i32); 4] {
    SHAPE_CELLS[shape.id() as usize]
}

/// An active or queued tetromino.
///
/// `x`/`y` are the anchor position in pixel units, y increasing upward
/// (row 0 is the bottom of the board). `velocity_x` is the horizontal
/// cell traversal in progress (-1, 0 or 1); `velocity_y` is the constant
/// downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    cells: [(i32, i32); 4],
    pub x: i32,
    pub y: i32,
    pub velocity_x: i32,
    pub velocity_y: i32,
}

impl Piece {
    /// Create a piece at the given pixel position
    pub fn new(x: i32, y: i32, shape: Shape) -> Self {
        Self {
            shape,
            cells: shape_cells(shape),
            x,
            y,
            velocity_x: 0,
            velocity_y: -1,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Rgba {
        self.shape.color()
    }

    /// Current (possibly rotated) cell offsets
    pub fn cells(&self) -> &[(i32, i32); 4] {
        &self.cells
    }

    /// Rotate 90 degrees counter-clockwise: (x, y) -> (y, -x).
    /// The square is rotationally invariant and stays untouched.
    pub fn rotate_left(&mut self) {
        if self.shape == Shape::Square {
            return;
        }
        for cell in &mut self.cells {
            *cell = (cell.1, -cell.0);
        }
    }

    /// Rotate 90 degrees clockwise: (x, y) -> (-y, x)
    pub fn rotate_right(&mut self) {
        if self.shape == Shape::Square {
            return;
        }
        for cell in &mut self.cells {
            *cell = (-cell.1, cell.0);
        }
    }

    /// Bounding extremes over the four offsets, used for edge-of-board
    /// checks before a slide starts
    pub fn min_x(&self) -> i32 {
        self.cells.iter().map(|&(vx, _)| vx).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i32 {
        self.cells.iter().map(|&(vx, _)| vx).max().unwrap_or(0)
    }

    pub fn min_y(&self) -> i32 {
        self.cells.iter().map(|&(_, vy)| vy).min().unwrap_or(0)
    }

    pub fn max_y(&self) -> i32 {
        self.cells.iter().map(|&(_, vy)| vy).max().unwrap_or(0)
    }

    /// Grid cell of the anchor (floor division of the pixel position)
    pub fn grid_column(&self) -> i32 {
        self.x.div_euclid(CELL_PX)
    }

    pub fn grid_row(&self) -> i32 {
        self.y.div_euclid(CELL_PX)
    }

    /// True when the position is an exact cell multiple on both axes.
    /// Freezing into the board is only legal in this state.
    pub fn is_grid_aligned(&self) -> bool {
        self.x.rem_euclid(CELL_PX) == 0 && self.y.rem_euclid(CELL_PX) == 0
    }

    /// Absolute pixel origin (bottom-left corner) of each occupied cell
    pub fn cell_origins_px(&self) -> [(i32, i32); 4] {
        self.cells
            .map(|(vx, vy)| (self.x + vx * CELL_PX, self.y + vy * CELL_PX))
    }
}
