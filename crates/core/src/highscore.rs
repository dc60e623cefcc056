//! High-score table - ten slots, sorted descending by score
//!
//! Pure table logic; reading and writing the backing file lives in the
//! store crate so the simulation core stays free of I/O.

use pixel_tetris_types::HIGH_SCORE_SLOTS;

/// Placeholder name for unclaimed slots
pub const DEFAULT_ENTRY_NAME: &str = "--------";

/// One recorded score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

/// Fixed-size descending score table. Insertion shifts lower entries down
/// and drops the last one, so the table never grows past ten slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        let entries = (0..HIGH_SCORE_SLOTS)
            .map(|_| HighScore {
                name: DEFAULT_ENTRY_NAME.to_string(),
                score: 0,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    /// Rank a score would take, scanning from the top: the first slot
    /// holding a strictly smaller score. `None` when the score does not
    /// make the table.
    pub fn qualifying_rank(&self, score: u32) -> Option<usize> {
        self.entries.iter().position(|entry| score > entry.score)
    }

    /// Insert at the given rank, pushing lower entries down and truncating
    /// back to the fixed size
    pub fn insert(&mut self, rank: usize, name: &str, score: u32) {
        if rank >= self.entries.len() {
            return;
        }
        self.entries.insert(
            rank,
            HighScore {
                name: name.to_string(),
                score,
            },
        );
        self.entries.truncate(HIGH_SCORE_SLOTS);
    }

    /// Rename an existing entry in place (live name editing)
    pub fn set_name(&mut self, rank: usize, name: &str) {
        if let Some(entry) = self.entries.get_mut(rank) {
            entry.name = name.to_string();
        }
    }

    /// Overwrite one slot, used when loading a persisted table
    pub fn set_entry(&mut self, rank: usize, name: &str, score: u32) {
        if let Some(entry) = self.entries.get_mut(rank) {
            entry.name = name.to_string();
            entry.score = score;
        }
    }
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::new()
    }
}
