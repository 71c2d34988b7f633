//! Game state module - the move state machine
//!
//! Ties together the board, line detection and the mode rule table. A game moves
//! from `Continue` to exactly one terminal outcome; once there, every further
//! move is rejected with [`MoveError::GameOver`].

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{BoardError, MoveError};
use crate::lines::{find_new_lines, DiscoveredLines, LineKey};
use crate::rules::{resolve, rules_for, ModeRules};
use crate::types::{Coord, Letter, Mode, Outcome, Player, MAX_LINES_PER_MOVE};

/// One accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
    pub player: Player,
}

impl MoveRecord {
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Last accepted move and what it produced (consumed by observers)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    pub record: MoveRecord,
    pub lines: ArrayVec<LineKey, MAX_LINES_PER_MOVE>,
    pub outcome: Outcome,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    mode: Mode,
    rules: &'static ModeRules,
    current: Player,
    lines: DiscoveredLines,
    scores: [u32; 2],
    outcome: Outcome,
    history: Vec<MoveRecord>,
    last_event: Option<MoveEvent>,
}

impl GameState {
    /// Create a new game; Blue moves first
    pub fn new(size: usize, mode: Mode) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            mode,
            rules: rules_for(mode),
            current: Player::Blue,
            lines: DiscoveredLines::new(),
            scores: [0; 2],
            outcome: Outcome::Continue,
            history: Vec::new(),
            last_event: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn lines(&self) -> &DiscoveredLines {
        &self.lines
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Accepted moves in order
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_event(&self) -> Option<&MoveEvent> {
        self.last_event.as_ref()
    }

    pub fn take_last_event(&mut self) -> Option<MoveEvent> {
        self.last_event.take()
    }

    /// Whether `apply_move(row, col, _)` would be accepted
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        !self.is_over() && matches!(self.board.is_empty(row, col), Ok(true))
    }

    /// Place a letter at (row, col).
    ///
    /// Without an explicit letter the current player's default is used. On error
    /// the state is left untouched.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        letter: Option<Letter>,
    ) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(row, col)? {
            return Err(MoveError::Occupied { row, col });
        }

        let mover = self.current;
        let letter = letter.unwrap_or_else(|| mover.default_letter());
        self.board.set(row, col, letter)?;

        let at = Coord::new(row, col);
        let found = find_new_lines(&self.board, at, &self.lines);
        for key in &found {
            self.lines.insert(*key, mover);
        }

        let t = resolve(
            self.rules,
            mover,
            found.len(),
            self.board.is_full(),
            self.scores,
        );
        self.scores[mover.index()] += t.points;
        if t.pass_turn {
            self.current = mover.opponent();
        }
        self.outcome = t.outcome;

        let record = MoveRecord {
            row,
            col,
            letter,
            player: mover,
        };
        self.history.push(record);

        debug!(
            row,
            col,
            letter = letter.as_str(),
            player = mover.as_str(),
            lines = found.len(),
            "move applied"
        );
        if t.outcome.is_terminal() {
            info!(
                outcome = t.outcome.as_str(),
                blue = self.scores[0],
                red = self.scores[1],
                moves = self.history.len(),
                "game over"
            );
        }

        self.last_event = Some(MoveEvent {
            record,
            lines: found,
            outcome: t.outcome,
        });
        Ok(t.outcome)
    }
}
