//! Game module - mode machine, fixed-timestep tick, intents and scoring
//!
//! The `Game` exclusively owns the board, the active and queued pieces,
//! the sequencer and the high-score table. The embedding shell feeds it
//! intents (velocity flags, a rotate-now call, mode transitions) and a
//! fixed-rate tick, and drains the returned events; it never touches the
//! simulation state directly.
//!
//! Motion runs in pixel sub-steps so sliding and falling feel continuous
//! while collision and freezing stay cell-snapped: horizontal sub-steps run
//! in batches on their own interval, vertical ones on another (shorter when
//! the drop flag is set). A piece freezes only when its position is
//! cell-aligned on both axes; a slide in progress defers the freeze.

use arrayvec::ArrayVec;

use pixel_tetris_types::{
    GameEvent, GameMode, Shape, CELL_PX, DROP_STEP_MS, DROP_SUBSTEPS, FALL_STEP_MS,
    FALL_SUBSTEPS, FIRST_SPAWN_ROW, GAME_OVER_DELAY_MS, LINE_CLEAR_STEP_MS, NAME_MAX_CHARS,
    NB_COLUMNS, SIDE_STEP_MS, SIDE_SUBSTEPS, SPAWN_COLUMN, SPAWN_ROW,
};

use crate::bag::PieceBag;
use crate::board::Board;
use crate::collision;
use crate::highscore::HighScoreTable;
use crate::piece::Piece;

/// Name recorded when the player confirms an empty name
const FALLBACK_NAME: &str = "XXXXXXXX";

/// Initial player name, kept across rounds
const INITIAL_NAME: &str = "XXXXX";

/// Events produced by one tick or one intent call
pub type Events = ArrayVec<GameEvent, 4>;

/// Points awarded for clearing `lines` rows with a single freeze
pub fn score_for_lines(lines: u32) -> u32 {
    match lines {
        0 => 0,
        1 => 40,
        2 => 100,
        3 => 300,
        4 => 1200,
        _ => 2000,
    }
}

/// The complete simulation state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next_shape: Shape,
    bag: PieceBag,
    mode: GameMode,
    score: u32,
    /// Completed lines awaiting their animated removal
    pending_lines: u32,
    /// Set when a freeze filled the top row; resolved after a short delay
    fatal: bool,
    drop_fast: bool,
    /// Held horizontal intent from the input layer (-1, 0, 1)
    h_intent: i32,
    /// Shared timer: line-clear steps, the round-end delay and horizontal
    /// sub-step batches
    step_timer_ms: u32,
    fall_timer_ms: u32,
    player_name: String,
    high_scores: HighScoreTable,
    /// Slot being edited while in HighScoreEntry
    entry_rank: Option<usize>,
}

impl Game {
    /// Create an idle game with the given sequencer seed and a previously
    /// loaded high-score table
    pub fn new(seed: u32, high_scores: HighScoreTable) -> Self {
        let mut bag = PieceBag::new(seed);
        let first = bag.next();
        let next_shape = bag.next();
        Self {
            board: Board::new(),
            active: Piece::new(SPAWN_COLUMN * CELL_PX, FIRST_SPAWN_ROW * CELL_PX, first),
            next_shape,
            bag,
            mode: GameMode::StandBy,
            score: 0,
            pending_lines: 0,
            fatal: false,
            drop_fast: false,
            h_intent: 0,
            step_timer_ms: 0,
            fall_timer_ms: 0,
            player_name: INITIAL_NAME.to_string(),
            high_scores,
            entry_rank: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_shape(&self) -> Shape {
        self.next_shape
    }

    pub fn pending_lines(&self) -> u32 {
        self.pending_lines
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn entry_rank(&self) -> Option<usize> {
        self.entry_rank
    }

    /// Advance the simulation by one fixed timestep
    pub fn tick(&mut self, dt_ms: u32) -> Events {
        let mut events = Events::new();
        self.step_timer_ms += dt_ms;
        self.fall_timer_ms += dt_ms;
        if self.mode == GameMode::Play {
            self.tick_play(&mut events);
        }
        events
    }

    fn tick_play(&mut self, events: &mut Events) {
        // Completed lines are removed one at a time on a fixed beat; all
        // other processing waits until the animation is done
        if self.pending_lines > 0 {
            if self.step_timer_ms >= LINE_CLEAR_STEP_MS {
                self.step_timer_ms = 0;
                self.board.clear_one_completed_line();
                self.pending_lines -= 1;
                events.push(GameEvent::LineCleared);
            }
            return;
        }

        if self.fatal {
            if self.step_timer_ms >= GAME_OVER_DELAY_MS {
                self.resolve_round_end(events);
            }
            return;
        }

        if self.step_timer_ms >= SIDE_STEP_MS {
            self.step_timer_ms = 0;
            for _ in 0..SIDE_SUBSTEPS {
                self.step_horizontal();
            }
        }

        let (fall_step_ms, substeps) = if self.drop_fast {
            (DROP_STEP_MS, DROP_SUBSTEPS)
        } else {
            (FALL_STEP_MS, FALL_SUBSTEPS)
        };
        if self.fall_timer_ms >= fall_step_ms {
            self.fall_timer_ms = 0;
            for _ in 0..substeps {
                if self.step_fall(events) {
                    break;
                }
            }
        }
    }

    /// One horizontal pixel sub-step. A traversal in progress continues
    /// until the position is cell-aligned again, then the velocity zeroes
    /// so a held key re-engages cleanly; from rest, a held intent starts a
    /// traversal only from an aligned position with room on the board.
    fn step_horizontal(&mut self) {
        let piece = &mut self.active;
        match piece.velocity_x {
            1 => {
                let ahead = piece.x + 1;
                if ahead.rem_euclid(CELL_PX) != 0 {
                    if !collision::hits_right(piece, &self.board) {
                        piece.x = ahead;
                    }
                } else {
                    piece.x = ahead;
                    piece.velocity_x = 0;
                }
            }
            -1 => {
                let ahead = piece.x - 1;
                if ahead.rem_euclid(CELL_PX) != 0 {
                    if !collision::hits_left(piece, &self.board) {
                        piece.x = ahead;
                    }
                } else {
                    piece.x = ahead;
                    piece.velocity_x = 0;
                }
            }
            _ => match self.h_intent {
                -1 => {
                    if piece.x.rem_euclid(CELL_PX) == 0
                        && piece.min_x() + piece.grid_column() > 0
                    {
                        piece.velocity_x = -1;
                        if !collision::hits_left(piece, &self.board) {
                            piece.x -= 1;
                        }
                    }
                }
                1 => {
                    if piece.x.rem_euclid(CELL_PX) == 0
                        && piece.max_x() + piece.grid_column() < NB_COLUMNS - 1
                    {
                        piece.velocity_x = 1;
                        if !collision::hits_right(piece, &self.board) {
                            piece.x += 1;
                        }
                    }
                }
                _ => {}
            },
        }
    }

    /// One vertical pixel sub-step. Returns true when the remaining
    /// sub-steps of the batch should be skipped, either because the piece
    /// froze or to hand control to the horizontal pass.
    fn step_fall(&mut self, events: &mut Events) -> bool {
        if collision::hits_stack_below(&self.active, &self.board) {
            if self.active.is_grid_aligned() {
                self.freeze_active(events);
                return true;
            }
            // A slide is mid-cell; freezing waits until it completes
            return false;
        }

        if !collision::touches_floor(&self.active) {
            self.active.y += self.active.velocity_y;
            // Back on a cell boundary with a slide requested: yield so the
            // next horizontal batch moves the piece atomically
            return self.active.is_grid_aligned() && self.h_intent != 0;
        }

        if self.h_intent != 0 {
            // Resting on the floor but still sliding
            return true;
        }
        if self.active.x.rem_euclid(CELL_PX) != 0 {
            // Finish the interrupted traversal before freezing
            self.active.x = (self.active.x.div_euclid(CELL_PX) + 1) * CELL_PX;
        }
        self.freeze_active(events);
        true
    }

    fn freeze_active(&mut self, events: &mut Events) {
        debug_assert!(
            self.active.is_grid_aligned(),
            "freeze on unaligned piece at ({}, {})",
            self.active.x,
            self.active.y
        );
        self.board.freeze_into(&self.active);

        self.pending_lines = self.board.count_completed_lines();
        if self.pending_lines > 0 {
            self.score += score_for_lines(self.pending_lines);
        }

        if self.board.is_game_over_state() {
            self.fatal = true;
            self.step_timer_ms = 0;
            events.push(GameEvent::GameOver);
        } else {
            self.drop_fast = false;
            self.active = Piece::new(SPAWN_COLUMN * CELL_PX, SPAWN_ROW * CELL_PX, self.next_shape);
            self.next_shape = self.bag.next();
        }
    }

    /// After the round-end delay: enter name entry when the score makes
    /// the table, plain game over otherwise
    fn resolve_round_end(&mut self, events: &mut Events) {
        match self.high_scores.qualifying_rank(self.score) {
            Some(rank) => self.enter_high_score_entry(rank, events),
            None => self.mode = GameMode::GameOver,
        }
    }

    fn enter_high_score_entry(&mut self, rank: usize, events: &mut Events) {
        self.high_scores.insert(rank, &self.player_name, self.score);
        self.entry_rank = Some(rank);
        events.push(GameEvent::HighScoreQualified);
        events.push(GameEvent::HighScoresUpdated);
        self.mode = GameMode::HighScoreEntry;
    }

    /// Set the held horizontal intent (-1 left, 0 released, 1 right).
    /// Only observed while in Play.
    pub fn set_horizontal_intent(&mut self, direction: i32) {
        self.h_intent = direction.clamp(-1, 1);
    }

    /// Rotate the active piece clockwise, immediately. Rotations that end
    /// up off-grid are shifted back toward the interior one cell at a time;
    /// an unrecoverable overlap leaves piece and position untouched.
    pub fn rotate(&mut self) {
        if self.mode != GameMode::Play || self.fatal {
            return;
        }
        if let Some(corrected) = collision::rotated_with_correction(&self.active, &self.board) {
            self.active = corrected;
        }
    }

    /// Engage the fast drop for the active piece
    pub fn start_drop(&mut self) {
        if self.mode == GameMode::Play {
            self.drop_fast = true;
        }
    }

    /// Primary confirm intent (start / drop / acknowledge / finish entry)
    pub fn confirm(&mut self) -> Events {
        let mut events = Events::new();
        match self.mode {
            GameMode::StandBy => self.start_round(),
            GameMode::Play => self.drop_fast = true,
            GameMode::GameOver => self.mode = GameMode::StandBy,
            GameMode::HighScoreEntry => self.finish_name_entry(&mut events),
        }
        events
    }

    /// Escape intent: abandon the round (recording a qualifying score) or
    /// finish name entry
    pub fn escape(&mut self) -> Events {
        let mut events = Events::new();
        match self.mode {
            GameMode::Play => match self.high_scores.qualifying_rank(self.score) {
                Some(rank) => self.enter_high_score_entry(rank, &mut events),
                None => self.mode = GameMode::StandBy,
            },
            GameMode::HighScoreEntry => self.finish_name_entry(&mut events),
            _ => {}
        }
        events
    }

    /// Append a character to the player name while editing, mirroring the
    /// edit into the claimed table slot
    pub fn push_name_char(&mut self, c: char) {
        if self.mode != GameMode::HighScoreEntry {
            return;
        }
        if self.player_name.chars().count() >= NAME_MAX_CHARS {
            return;
        }
        self.player_name.push(c);
        self.sync_entry_name();
    }

    /// Delete the last character of the player name while editing
    pub fn pop_name_char(&mut self) {
        if self.mode != GameMode::HighScoreEntry {
            return;
        }
        self.player_name.pop();
        self.sync_entry_name();
    }

    fn sync_entry_name(&mut self) {
        if let Some(rank) = self.entry_rank {
            self.high_scores.set_name(rank, &self.player_name);
        }
    }

    fn finish_name_entry(&mut self, events: &mut Events) {
        if self.player_name.is_empty() {
            self.player_name = FALLBACK_NAME.to_string();
        }
        self.sync_entry_name();
        events.push(GameEvent::HighScoresUpdated);
        self.mode = GameMode::StandBy;
    }

    fn start_round(&mut self) {
        self.score = 0;
        self.board.clear();
        self.pending_lines = 0;
        self.fatal = false;
        self.drop_fast = false;
        self.h_intent = 0;
        self.step_timer_ms = 0;
        self.fall_timer_ms = 0;
        self.entry_rank = None;
        self.active = Piece::new(
            SPAWN_COLUMN * CELL_PX,
            FIRST_SPAWN_ROW * CELL_PX,
            self.next_shape,
        );
        self.next_shape = self.bag.next();
        self.mode = GameMode::Play;
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
