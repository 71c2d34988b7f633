//! Replay engine - re-drives a fresh game from a recorded log
//!
//! Moves are fed through the same [`GameEngine::apply_move`] path as live play,
//! with the recorded letter passed explicitly. Pacing is left to the caller: it
//! decides when to call [`ReplayEngine::step`].

use std::path::Path;

use tracing::debug;

use crate::error::ReplayError;
use crate::game::GameEngine;
use crate::types::Outcome;
use sos_core::{GameState, MoveRecord};
use sos_log::ReplayLog;

#[derive(Debug)]
pub struct ReplayEngine {
    log: ReplayLog,
    engine: GameEngine,
    cursor: usize,
}

impl ReplayEngine {
    /// Load a log file; nothing is adopted unless the whole log validates
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let log = sos_log::load(path)?;
        Self::from_log(log)
    }

    pub fn from_log(log: ReplayLog) -> Result<Self, ReplayError> {
        let engine = GameEngine::new(log.size, log.mode)?;
        debug!(size = log.size, mode = log.mode.as_str(), moves = log.moves.len(), "replay loaded");
        Ok(Self {
            log,
            engine,
            cursor: 0,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn log(&self) -> &ReplayLog {
        &self.log
    }

    /// Index of the next move to apply
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.log.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.moves.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.log.moves.len()
    }

    /// The move the next `step` will apply
    pub fn peek(&self) -> Option<&MoveRecord> {
        self.log.moves.get(self.cursor)
    }

    /// Apply the next recorded move.
    ///
    /// Returns `Ok(None)` once every move has been applied. On error the cursor
    /// does not advance.
    pub fn step(&mut self) -> Result<Option<Outcome>, ReplayError> {
        let Some(&record) = self.log.moves.get(self.cursor) else {
            return Ok(None);
        };
        let index = self.cursor;

        let expected = self.engine.current_player();
        if record.player != expected && !self.engine.is_over() {
            return Err(ReplayError::PlayerMismatch {
                index,
                expected,
                found: record.player,
            });
        }

        let outcome = self
            .engine
            .apply_move(record.row, record.col, Some(record.letter))
            .map_err(|source| ReplayError::Move { index, source })?;
        self.cursor += 1;
        Ok(Some(outcome))
    }

    /// Apply every remaining move and return the final outcome
    pub fn run_all(&mut self) -> Result<Outcome, ReplayError> {
        while self.step()?.is_some() {}
        Ok(self.engine.outcome())
    }

    /// Rewind to an empty board of the recorded size and mode
    pub fn reset(&mut self) -> Result<(), ReplayError> {
        self.engine = GameEngine::new(self.log.size, self.log.mode)?;
        self.cursor = 0;
        Ok(())
    }
}
