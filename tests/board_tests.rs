//! Board tests - bounds checks and cell storage

use sos_game::core::{Board, BoardError};
use sos_game::types::{Cell, Letter, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new(5).unwrap();
    assert_eq!(board.size(), 5);
    assert!(!board.is_full());

    for row in 0..5 {
        for col in 0..5 {
            assert!(board.in_bounds(row, col));
            assert_eq!(board.get(row, col), Ok(Cell::Empty));
            assert_eq!(board.is_empty(row, col), Ok(true));
        }
    }
}

#[test]
fn test_board_size_limits() {
    assert!(Board::new(MIN_BOARD_SIZE).is_ok());
    assert!(Board::new(MAX_BOARD_SIZE).is_ok());
    assert!(matches!(
        Board::new(MIN_BOARD_SIZE - 1),
        Err(BoardError::InvalidSize { .. })
    ));
    assert!(matches!(
        Board::new(MAX_BOARD_SIZE + 1),
        Err(BoardError::InvalidSize { .. })
    ));
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new(3).unwrap();
    let oob = BoardError::OutOfBounds {
        row: 3,
        col: 0,
        size: 3,
    };

    assert!(!board.in_bounds(3, 0));
    assert!(!board.in_bounds(0, 3));
    assert_eq!(board.get(3, 0), Err(oob));
    assert_eq!(board.set(3, 0, Letter::S), Err(oob));
    assert_eq!(board.is_empty(3, 0), Err(oob));
    assert_eq!(oob.code(), "out_of_bounds");
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(4).unwrap();

    board.set(2, 3, Letter::S).unwrap();
    board.set(0, 0, Letter::O).unwrap();

    assert_eq!(board.get(2, 3), Ok(Cell::Filled(Letter::S)));
    assert_eq!(board.get(0, 0), Ok(Cell::Filled(Letter::O)));
    assert_eq!(board.is_empty(2, 3), Ok(false));
    assert_eq!(board.row(2).map(|r| r[3]), Some(Cell::Filled(Letter::S)));
}

#[test]
fn test_board_is_full() {
    let mut board = Board::new(3).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert!(!board.is_full());
            board.set(row, col, Letter::O).unwrap();
        }
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);

    board.clear(1, 1).unwrap();
    assert!(!board.is_full());
}
