//! Game rules tests - turn order, scoring and end-of-game for both modes

use sos_game::core::{GameState, MoveError};
use sos_game::types::{Cell, Letter, Mode, Outcome, Player};

fn play(game: &mut GameState, moves: &[(usize, usize, Letter)]) -> Outcome {
    let mut outcome = Outcome::Continue;
    for &(r, c, l) in moves {
        outcome = game.apply_move(r, c, Some(l)).unwrap();
    }
    outcome
}

#[test]
fn test_blue_moves_first_and_turns_alternate() {
    let mut game = GameState::new(5, Mode::Simple).unwrap();
    assert_eq!(game.current_player(), Player::Blue);

    game.apply_move(0, 0, None).unwrap();
    assert_eq!(game.current_player(), Player::Red);
    game.apply_move(4, 4, None).unwrap();
    assert_eq!(game.current_player(), Player::Blue);

    // Default letters: Blue S, Red O
    assert_eq!(game.board().get(0, 0), Ok(Cell::Filled(Letter::S)));
    assert_eq!(game.board().get(4, 4), Ok(Cell::Filled(Letter::O)));
}

#[test]
fn test_simple_first_line_wins() {
    let mut game = GameState::new(3, Mode::Simple).unwrap();
    let outcome = play(
        &mut game,
        &[
            (0, 0, Letter::S), // Blue
            (1, 0, Letter::O), // Red
            (0, 1, Letter::O), // Blue
            (1, 1, Letter::O), // Red
        ],
    );
    assert_eq!(outcome, Outcome::Continue);

    let outcome = game.apply_move(0, 2, Some(Letter::S)).unwrap();
    assert_eq!(outcome, Outcome::Winner(Player::Blue));
    assert!(game.is_over());
    assert_eq!(game.board().empty_cells().count(), 4);
    assert_eq!(game.lines().len(), 1);
}

#[test]
fn test_simple_full_board_without_line_is_draw() {
    let mut game = GameState::new(3, Mode::Simple).unwrap();
    let mut outcome = Outcome::Continue;
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(outcome, Outcome::Continue);
            outcome = game.apply_move(row, col, Some(Letter::O)).unwrap();
        }
    }
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_general_line_scores_and_keeps_turn() {
    let mut game = GameState::new(3, Mode::General).unwrap();
    play(
        &mut game,
        &[
            (0, 0, Letter::S), // Blue
            (1, 0, Letter::O), // Red
            (0, 1, Letter::O), // Blue
            (1, 1, Letter::O), // Red
        ],
    );

    let outcome = game.apply_move(0, 2, Some(Letter::S)).unwrap();
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(game.scores(), [1, 0]);
    assert_eq!(game.current_player(), Player::Blue);

    let outcome = play(
        &mut game,
        &[
            (1, 2, Letter::O), // Blue
            (2, 0, Letter::O), // Red
            (2, 1, Letter::O), // Blue
            (2, 2, Letter::O), // Red fills the board
        ],
    );
    assert_eq!(outcome, Outcome::Winner(Player::Blue));
    assert_eq!(game.scores(), [1, 0]);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_general_full_board_tied_is_draw() {
    let mut game = GameState::new(3, Mode::General).unwrap();
    let mut outcome = Outcome::Continue;
    for row in 0..3 {
        for col in 0..3 {
            outcome = game.apply_move(row, col, Some(Letter::O)).unwrap();
        }
    }
    assert_eq!(game.scores(), [0, 0]);
    assert_eq!(outcome, Outcome::Draw);
}

#[test]
fn test_invalid_moves_leave_state_unchanged() {
    let mut game = GameState::new(3, Mode::General).unwrap();
    game.apply_move(1, 1, None).unwrap();

    let board = game.board().clone();
    let player = game.current_player();

    let err = game.apply_move(1, 1, None).unwrap_err();
    assert_eq!(err, MoveError::Occupied { row: 1, col: 1 });
    assert_eq!(err.code(), "invalid_move");

    let err = game.apply_move(3, 0, None).unwrap_err();
    assert!(matches!(err, MoveError::OutOfBounds(_)));
    assert_eq!(err.code(), "invalid_move");

    assert_eq!(game.board(), &board);
    assert_eq!(game.current_player(), player);
    assert_eq!(game.history().len(), 1);
    assert!(!game.is_valid_move(1, 1));
    assert!(!game.is_valid_move(0, 3));
    assert!(game.is_valid_move(0, 0));
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut game = GameState::new(3, Mode::Simple).unwrap();
    play(
        &mut game,
        &[
            (0, 0, Letter::S),
            (1, 0, Letter::O),
            (0, 1, Letter::O),
            (1, 1, Letter::O),
            (0, 2, Letter::S),
        ],
    );
    assert!(game.is_over());

    let err = game.apply_move(2, 2, None).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(err.code(), "game_over");
    assert!(!game.is_valid_move(2, 2));
    assert_eq!(game.outcome(), Outcome::Winner(Player::Blue));
}

#[test]
fn test_last_event_reports_new_lines() {
    let mut game = GameState::new(3, Mode::General).unwrap();
    play(
        &mut game,
        &[
            (0, 0, Letter::S),
            (1, 0, Letter::O),
            (0, 1, Letter::O),
            (1, 1, Letter::O),
            (0, 2, Letter::S),
        ],
    );

    let event = game.take_last_event().unwrap();
    assert_eq!(event.record.player, Player::Blue);
    assert_eq!(event.record.letter, Letter::S);
    assert_eq!(event.lines.len(), 1);
    assert_eq!(event.outcome, Outcome::Continue);
    assert!(game.last_event().is_none());
}
