//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation: the grid, the
//! active piece, collision resolution, piece sequencing, scoring, the mode
//! machine and the high-score table. It has **zero dependencies** on UI,
//! audio, or file I/O, making it:
//!
//! - **Deterministic**: the same sequencer seed produces the same rounds
//! - **Testable**: every rule is exercised without a window or a clock
//! - **Portable**: the shell only feeds intents and a fixed-rate tick
//!
//! # Module structure
//!
//! - [`board`]: 10x20 grid, line detection and removal, freezing
//! - [`piece`]: tetromino geometry, in-place rotation, pixel position
//! - [`collision`]: pixel-corner hit tests and rotation correction
//! - [`bag`]: double 7-bag sequencer over a seedable LCG
//! - [`highscore`]: ten-slot descending score table
//! - [`game`]: mode machine, sub-stepped motion, scoring, events
//! - [`snapshot`]: zero-allocation state export for renderers

pub mod bag;
pub mod board;
pub mod collision;
pub mod game;
pub mod highscore;
pub mod piece;
pub mod snapshot;

pub use bag::PieceBag;
pub use board::Board;
pub use game::{score_for_lines, Events, Game};
pub use highscore::{HighScore, HighScoreTable};
pub use piece::{shape_cells, Piece};
pub use snapshot::{GameSnapshot, NextSnapshot, PieceSnapshot};
