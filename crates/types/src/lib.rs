//! Core types shared across the workspace
//! This crate contains pure data types and tuning constants with no dependencies

/// Board dimensions (cells)
pub const NB_COLUMNS: i32 = 10;
pub const NB_ROWS: i32 = 20;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (NB_COLUMNS * NB_ROWS) as usize;

/// Side of one board cell in pixel units. Piece positions advance one pixel
/// at a time; collision and freeze decisions snap to multiples of this.
pub const CELL_PX: i32 = 25;

/// Nominal fixed timestep (milliseconds)
pub const TICK_MS: u32 = 10;

/// Delay between removing two completed lines (one line per step)
pub const LINE_CLEAR_STEP_MS: u32 = 200;

/// Delay before a finished round resolves to GameOver / HighScoreEntry
pub const GAME_OVER_DELAY_MS: u32 = 400;

/// Horizontal motion: pixel sub-steps run in batches on a fixed interval,
/// so sliding speed stays independent of fall speed
pub const SIDE_STEP_MS: u32 = 30;
pub const SIDE_SUBSTEPS: u32 = 4;

/// Vertical motion, normal gravity
pub const FALL_STEP_MS: u32 = 30;
pub const FALL_SUBSTEPS: u32 = 3;

/// Vertical motion while the drop flag is set
pub const DROP_STEP_MS: u32 = 10;
pub const DROP_SUBSTEPS: u32 = 10;

/// Spawn anchor for the active piece (cell coordinates, row 0 = bottom)
pub const SPAWN_COLUMN: i32 = 5;
pub const SPAWN_ROW: i32 = 19;
/// The first piece of a fresh round spawns one row lower
pub const FIRST_SPAWN_ROW: i32 = 18;

/// High-score table size and name editing bound
pub const HIGH_SCORE_SLOTS: usize = 10;
pub const NAME_MAX_CHARS: usize = 12;

/// RGBA color
pub type Rgba = [u8; 4];

/// Tetromino shape ids. `None` (id 0) is the inert placeholder and is never
/// dealt as a playable piece; board cells hold `None` when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Shape {
    None = 0,
    Z = 1,
    S = 2,
    Line = 3,
    T = 4,
    Square = 5,
    L = 6,
    MirroredL = 7,
}

impl Shape {
    /// The seven playable shapes, in id order
    pub const ALL: [Shape; 7] = [
        Shape::Z,
        Shape::S,
        Shape::Line,
        Shape::T,
        Shape::Square,
        Shape::L,
        Shape::MirroredL,
    ];

    /// Parse a shape from its cell tag
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Shape::None),
            1 => Some(Shape::Z),
            2 => Some(Shape::S),
            3 => Some(Shape::Line),
            4 => Some(Shape::T),
            5 => Some(Shape::Square),
            6 => Some(Shape::L),
            7 => Some(Shape::MirroredL),
            _ => None,
        }
    }

    /// Cell tag of this shape (0 = empty)
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == Shape::None
    }

    /// Fixed display color of this shape
    pub fn color(self) -> Rgba {
        match self {
            Shape::None => [0x00, 0x00, 0x00, 0x00],
            Shape::Z => [0xCC, 0x66, 0x66, 0xFF],
            Shape::S => [0x66, 0xCC, 0x66, 0xFF],
            Shape::Line => [0x66, 0x66, 0xCC, 0xFF],
            Shape::T => [0xCC, 0xCC, 0x66, 0xFF],
            Shape::Square => [0xCC, 0x66, 0xCC, 0xFF],
            Shape::L => [0x66, 0xCC, 0xCC, 0xFF],
            Shape::MirroredL => [0xDA, 0xAA, 0x00, 0xFF],
        }
    }
}

/// Game modes. `StandBy` is the idle menu, `Play` the active simulation;
/// a finished round resolves to `GameOver` or, when the score qualifies,
/// to `HighScoreEntry` where the player edits the recorded name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    StandBy,
    Play,
    GameOver,
    HighScoreEntry,
}

/// Events reported upward by the simulation, drained once per call.
///
/// `LineCleared` fires once per removed line (sound cue pulse).
/// `HighScoresUpdated` is the persistence trigger: the shell reacts by
/// rewriting the high-score file, fire and forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LineCleared,
    GameOver,
    HighScoreQualified,
    HighScoresUpdated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_id_roundtrip() {
        for id in 0..=7u8 {
            let shape = Shape::from_id(id).unwrap();
            assert_eq!(shape.id(), id);
        }
        assert_eq!(Shape::from_id(8), None);
    }

    #[test]
    fn test_all_excludes_placeholder() {
        assert_eq!(Shape::ALL.len(), 7);
        assert!(!Shape::ALL.contains(&Shape::None));
    }

    #[test]
    fn test_empty_cells_are_transparent() {
        assert!(Shape::None.is_empty());
        assert_eq!(Shape::None.color()[3], 0);
        for shape in Shape::ALL {
            assert!(!shape.is_empty());
            assert_eq!(shape.color()[3], 0xFF);
        }
    }
}
