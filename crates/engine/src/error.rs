use thiserror::Error;

use crate::types::Player;
use sos_core::{BoardError, MoveError};
use sos_log::LogError;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Log(#[from] LogError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("recorded move {index} rejected: {source}")]
    Move {
        index: usize,
        #[source]
        source: MoveError,
    },
    #[error(
        "recorded move {index} belongs to {} but {} is to move",
        .found.as_str(),
        .expected.as_str()
    )]
    PlayerMismatch {
        index: usize,
        expected: Player,
        found: Player,
    },
}

impl ReplayError {
    pub fn code(&self) -> &'static str {
        match self {
            ReplayError::Log(e) => e.code(),
            ReplayError::Board(e) => e.code(),
            ReplayError::Move { source, .. } => source.code(),
            ReplayError::PlayerMismatch { .. } => "player_mismatch",
        }
    }
}
