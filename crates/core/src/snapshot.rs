//! Read-only state snapshot for render and audio consumers
//!
//! The shell owns one `GameSnapshot` buffer and refreshes it once per
//! frame with [`Game::snapshot_into`](crate::game::Game::snapshot_into),
//! so taking a snapshot allocates nothing.

use pixel_tetris_types::{GameMode, Rgba, Shape, BOARD_CELLS};

use crate::game::Game;
use crate::piece::shape_cells;

/// The active piece as a renderer sees it: four absolute pixel cells plus
/// the shape's fixed color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub shape: Shape,
    pub color: Rgba,
    pub cells_px: [(i32, i32); 4],
}

/// The queued piece: unrotated cell offsets, positioned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextSnapshot {
    pub shape: Shape,
    pub color: Rgba,
    pub cells: [(i32, i32); 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Raw cell tags, row-major from the bottom row up
    pub board: [u8; BOARD_CELLS],
    pub active: PieceSnapshot,
    pub next: NextSnapshot,
    pub score: u32,
    pub mode: GameMode,
    pub pending_lines: u32,
    /// High-score slot to highlight while a name is being entered
    pub highlight_rank: Option<usize>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [0; BOARD_CELLS],
            active: PieceSnapshot {
                shape: Shape::None,
                color: Shape::None.color(),
                cells_px: [(0, 0); 4],
            },
            next: NextSnapshot {
                shape: Shape::None,
                color: Shape::None.color(),
                cells: [(0, 0); 4],
            },
            score: 0,
            mode: GameMode::StandBy,
            pending_lines: 0,
            highlight_rank: None,
        }
    }
}

impl Game {
    /// Refresh a caller-owned snapshot buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board().write_ids(&mut out.board);

        let active = self.active();
        out.active = PieceSnapshot {
            shape: active.shape(),
            color: active.color(),
            cells_px: active.cell_origins_px(),
        };

        let next = self.next_shape();
        out.next = NextSnapshot {
            shape: next,
            color: next.color(),
            cells: shape_cells(next),
        };

        out.score = self.score();
        out.mode = self.mode();
        out.pending_lines = self.pending_lines();
        out.highlight_rank = self.entry_rank();
    }

    /// Convenience allocation of a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
