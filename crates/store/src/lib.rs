//! High-score persistence - a ten-line `name;score` text record
//!
//! The store is deliberately minimal: the whole table is rewritten on every
//! confirmed update, there is no append mode and no schema version. A
//! missing or damaged file is never an error; unreadable entries simply
//! keep their defaults. The shell calls [`save`] when the simulation emits
//! `HighScoresUpdated` and may ignore the result, as a failed write only
//! costs the record, never the game.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pixel_tetris_core::HighScoreTable;
use pixel_tetris_types::HIGH_SCORE_SLOTS;

/// Default file name next to the executable
pub const HIGH_SCORE_FILE: &str = "highscores.txt";

/// Load the table from `path`. Missing file or malformed lines fall back
/// to default entries; this never fails.
pub fn load(path: &Path) -> HighScoreTable {
    let mut table = HighScoreTable::new();
    let Ok(text) = fs::read_to_string(path) else {
        return table;
    };
    let mut rank = 0;
    for line in text.lines() {
        if rank >= HIGH_SCORE_SLOTS {
            break;
        }
        let Some((name, score)) = line.split_once(';') else {
            continue;
        };
        let Ok(score) = score.trim().parse::<u32>() else {
            continue;
        };
        table.set_entry(rank, name, score);
        rank += 1;
    }
    table
}

/// Rewrite the whole table to `path`, one `name;score` line per slot
pub fn save(path: &Path, table: &HighScoreTable) -> Result<()> {
    let mut text = String::new();
    for entry in table.entries() {
        text.push_str(&entry.name);
        text.push(';');
        text.push_str(&entry.score.to_string());
        text.push('\n');
    }
    fs::write(path, text)
        .with_context(|| format!("failed to write high scores to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pixel-tetris-{}-{}.txt", tag, std::process::id()));
        path
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let table = load(Path::new("definitely/not/here/highscores.txt"));
        assert_eq!(table, HighScoreTable::new());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = scratch_file("roundtrip");
        let mut table = HighScoreTable::new();
        table.insert(0, "ALICE", 1200);
        table.insert(1, "BOB", 300);

        save(&path, &table).unwrap();
        let loaded = load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, table);
    }

    #[test]
    fn test_save_writes_expected_format() {
        let path = scratch_file("format");
        let mut table = HighScoreTable::new();
        table.insert(0, "EVE", 40);

        save(&path, &table).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(text.starts_with("EVE;40\n"));
        assert_eq!(text.lines().count(), HIGH_SCORE_SLOTS);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let path = scratch_file("malformed");
        fs::write(&path, "ALICE;1200\ngarbage line\nBOB;not-a-number\nCAROL;55\n").unwrap();

        let table = load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(table.entries()[0].name, "ALICE");
        assert_eq!(table.entries()[0].score, 1200);
        assert_eq!(table.entries()[1].name, "CAROL");
        assert_eq!(table.entries()[1].score, 55);
        assert_eq!(table.entries()[2].score, 0);
    }

    #[test]
    fn test_load_ignores_extra_lines() {
        let path = scratch_file("extra");
        let mut text = String::new();
        for i in 0..15 {
            text.push_str(&format!("P{};{}\n", i, 1500 - i * 100));
        }
        fs::write(&path, text).unwrap();

        let table = load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(table.entries().len(), HIGH_SCORE_SLOTS);
        assert_eq!(table.entries()[9].name, "P9");
    }
}
