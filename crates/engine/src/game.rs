//! Live game engine - game state plus optional recording
//!
//! This is the entry point a front end drives: every accepted human or automated
//! move goes through [`GameEngine::apply_move`]. When a recording is active the
//! move is appended and persisted before the call returns.

use std::path::Path;

use tracing::warn;

use crate::types::{Letter, Mode, Outcome, Player};
use sos_core::{Board, BoardError, GameState, MoveError};
use sos_log::{LogError, MoveLog, ReplayLog};

#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    recorder: Option<MoveLog>,
    /// Recording failure not yet seen by the caller
    warning: Option<LogError>,
}

impl GameEngine {
    pub fn new(size: usize, mode: Mode) -> Result<Self, BoardError> {
        Ok(Self {
            state: GameState::new(size, mode)?,
            recorder: None,
            warning: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.state.is_valid_move(row, col)
    }

    /// Apply a move and record it if a log is attached.
    ///
    /// A recording failure does not fail the move: recording is switched off for
    /// the rest of the game and the error is kept for [`take_warning`](Self::take_warning).
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        letter: Option<Letter>,
    ) -> Result<Outcome, MoveError> {
        let outcome = self.state.apply_move(row, col, letter)?;

        if let (Some(log), Some(&record)) = (self.recorder.as_mut(), self.state.history().last()) {
            if let Err(e) = log.append(record) {
                warn!(error = %e, path = %log.path().display(), "recording disabled");
                self.recorder = None;
                self.warning = Some(e);
            }
        }

        if outcome.is_terminal() {
            self.stop_recording();
        }
        Ok(outcome)
    }

    /// Start recording to `path`, closing any active recording first.
    ///
    /// Moves already played are written too, so the log always replays from an
    /// empty board.
    pub fn start_recording(&mut self, path: impl AsRef<Path>) -> Result<(), LogError> {
        self.stop_recording();
        let log = MoveLog::start(
            path,
            self.state.size(),
            self.state.mode(),
            self.state.history(),
        )?;
        self.recorder = Some(log);
        if self.state.is_over() {
            self.stop_recording();
        }
        Ok(())
    }

    /// Detach the active recording, returning what was written
    pub fn stop_recording(&mut self) -> Option<ReplayLog> {
        self.recorder.take().map(MoveLog::stop)
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    pub fn recording_path(&self) -> Option<&Path> {
        self.recorder.as_ref().map(MoveLog::path)
    }

    pub fn take_warning(&mut self) -> Option<LogError> {
        self.warning.take()
    }
}
