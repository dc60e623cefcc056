//! Integration tests for the simulation loop and its collaborators

use pixel_tetris::core::{collision, score_for_lines, Board, Game, HighScoreTable, Piece, PieceBag};
use pixel_tetris::types::{
    GameEvent, GameMode, Shape, CELL_PX, DROP_STEP_MS, FALL_STEP_MS, GAME_OVER_DELAY_MS,
    NB_COLUMNS, SIDE_STEP_MS,
};

#[test]
fn test_round_lifecycle() {
    let mut game = Game::new(12345, HighScoreTable::new());
    assert_eq!(game.mode(), GameMode::StandBy);

    game.confirm();
    assert_eq!(game.mode(), GameMode::Play);
    assert_eq!(game.score(), 0);

    // Escaping with nothing scored goes straight back to standby
    game.escape();
    assert_eq!(game.mode(), GameMode::StandBy);
}

#[test]
fn test_gravity_and_slide_via_public_surface() {
    let mut game = Game::new(12345, HighScoreTable::new());
    game.confirm();

    let x = game.active().x;
    let y = game.active().y;

    game.tick(FALL_STEP_MS);
    assert!(game.active().y < y, "gravity pulls the piece down");
    assert_eq!(game.active().x, x);

    game.set_horizontal_intent(-1);
    game.tick(SIDE_STEP_MS);
    assert!(game.active().x < x, "held intent slides the piece");
    game.set_horizontal_intent(0);
}

#[test]
fn test_dropped_pieces_stack_until_game_over() {
    let mut game = Game::new(777, HighScoreTable::new());
    game.confirm();
    game.start_drop();

    // With no horizontal input every piece piles up around the spawn
    // column; the stack must reach the top and end the round, and no
    // piece may spawn afterwards.
    let mut game_over_at = None;
    for tick in 0..60_000u32 {
        let events = game.tick(DROP_STEP_MS);
        if events.contains(&GameEvent::GameOver) {
            game_over_at = Some(tick);
            break;
        }
        game.start_drop();
    }
    let game_over_at = game_over_at.expect("stack never topped out");
    assert!(game.board().is_game_over_state());

    let frozen = *game.active();
    for _ in game_over_at..game_over_at + 10 {
        game.tick(DROP_STEP_MS);
        if game.mode() != GameMode::Play {
            break;
        }
        assert_eq!(*game.active(), frozen, "no piece spawns after game over");
    }

    // Nothing was cleared, so a zero score resolves to plain game over
    let mut guard = 0;
    while game.mode() == GameMode::Play {
        game.tick(GAME_OVER_DELAY_MS);
        guard += 1;
        assert!(guard < 10);
    }
    assert_eq!(game.mode(), GameMode::GameOver);

    game.confirm();
    assert_eq!(game.mode(), GameMode::StandBy);
}

#[test]
fn test_score_table() {
    assert_eq!(score_for_lines(0), 0);
    assert_eq!(score_for_lines(1), 40);
    assert_eq!(score_for_lines(2), 100);
    assert_eq!(score_for_lines(3), 300);
    assert_eq!(score_for_lines(4), 1200);
    assert_eq!(score_for_lines(5), 2000);
    assert_eq!(score_for_lines(9), 2000);
}

#[test]
fn test_right_edge_rotation_is_corrected() {
    let board = Board::new();
    let piece = Piece::new((NB_COLUMNS - 1) * CELL_PX, 5 * CELL_PX, Shape::Line);

    let rotated = collision::rotated_with_correction(&piece, &board)
        .expect("open board leaves room after the shift");
    assert!(!collision::is_beyond_right_limit(&rotated));
    assert!(rotated.x < piece.x, "shifted toward the interior");
    assert_eq!(rotated.y, piece.y, "correction is horizontal only");
}

#[test]
fn test_blocked_rotation_leaves_piece_exactly_as_before() {
    let mut board = Board::new();
    // Occupy the row the corrected rotation would land on
    for column in 0..NB_COLUMNS {
        if column != NB_COLUMNS - 1 {
            board.set(column, 5, Shape::Z);
        }
    }
    let piece = Piece::new((NB_COLUMNS - 1) * CELL_PX, 5 * CELL_PX, Shape::Line);

    assert!(collision::rotated_with_correction(&piece, &board).is_none());
    // The caller keeps the original piece: position and offsets untouched
    assert_eq!(piece.x, (NB_COLUMNS - 1) * CELL_PX);
    assert_eq!(piece.cells(), &[(0, -1), (0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_bag_fairness_across_draw_windows() {
    let mut bag = PieceBag::new(31337);
    for _window in 0..20 {
        let mut counts = [0u32; 8];
        for _ in 0..14 {
            counts[bag.next().id() as usize] += 1;
        }
        for shape in Shape::ALL {
            assert_eq!(counts[shape.id() as usize], 2);
        }
    }
}

#[test]
fn test_game_snapshot_tracks_play() {
    let mut game = Game::new(9, HighScoreTable::new());
    game.confirm();

    let mut snap = game.snapshot();
    assert_eq!(snap.mode, GameMode::Play);
    assert_eq!(snap.next.shape, game.next_shape());

    for _ in 0..5 {
        game.tick(FALL_STEP_MS);
    }
    game.snapshot_into(&mut snap);
    assert_eq!(snap.active.cells_px, game.active().cell_origins_px());
    assert_eq!(snap.score, game.score());
}
