//! High-score table and store tests - the shell-side persistence wiring

use std::fs;
use std::path::PathBuf;

use pixel_tetris::core::HighScoreTable;
use pixel_tetris::store;
use pixel_tetris::types::HIGH_SCORE_SLOTS;

fn scratch_file(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "pixel-tetris-it-{}-{}.txt",
        tag,
        std::process::id()
    ));
    path
}

#[test]
fn test_fresh_table_round_trips_through_store() {
    let path = scratch_file("fresh");
    let table = HighScoreTable::new();

    store::save(&path, &table).unwrap();
    let loaded = store::load(&path);
    let _ = fs::remove_file(&path);

    assert_eq!(loaded, table);
}

#[test]
fn test_insertion_order_survives_persistence() {
    let path = scratch_file("order");
    let mut table = HighScoreTable::new();
    table.insert(0, "FIRST", 1200);
    table.insert(1, "SECOND", 300);
    table.insert(1, "BETWEEN", 900);

    store::save(&path, &table).unwrap();
    let loaded = store::load(&path);
    let _ = fs::remove_file(&path);

    assert_eq!(loaded.entries().len(), HIGH_SCORE_SLOTS);
    assert_eq!(loaded.entries()[0].name, "FIRST");
    assert_eq!(loaded.entries()[1].name, "BETWEEN");
    assert_eq!(loaded.entries()[2].name, "SECOND");
    let scores: Vec<u32> = loaded.entries().iter().map(|e| e.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted, "table stays sorted descending");
}

#[test]
fn test_missing_file_is_not_an_error() {
    let loaded = store::load(&scratch_file("never-created"));
    assert_eq!(loaded, HighScoreTable::new());
}
