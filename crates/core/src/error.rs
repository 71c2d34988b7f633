//! Error types for board access and move validation.
//!
//! Every engine mutation reports failure through `Result`; nothing in the core
//! panics or returns a bare `false` for a rejected move.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("board size {size} is not supported (expected {min}..={max})")]
    InvalidSize { size: usize, min: usize, max: usize },
}

impl BoardError {
    pub fn code(self) -> &'static str {
        match self {
            BoardError::OutOfBounds { .. } => "out_of_bounds",
            BoardError::InvalidSize { .. } => "invalid_size",
        }
    }
}

/// A move the game state refused; the state is unchanged when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid move: {0}")]
    OutOfBounds(#[from] BoardError),
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
    #[error("game is already over")]
    GameOver,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::OutOfBounds(_) | MoveError::Occupied { .. } => "invalid_move",
            MoveError::GameOver => "game_over",
        }
    }
}
