//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary of the SOS game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, automated play, log serialization).
//!
//! # Board Dimensions
//!
//! Boards are square, `N x N`, and the size is fixed for the lifetime of a game:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_BOARD_SIZE` | 3 | Smallest board that can hold a line |
//! | `MAX_BOARD_SIZE` | 20 | Largest supported board |
//! | `DEFAULT_BOARD_SIZE` | 10 | Size used when none is configured |
//!
//! Coordinates are `(row, col)` with `row` growing downwards and `col` growing
//! to the right, both in `0..N`.
//!
//! # Players and Letters
//!
//! - **Blue** moves first and places `S` by default
//! - **Red** moves second and places `O` by default
//!
//! A move may override the letter explicitly (automated play and replay do this).
//!
//! # Examples
//!
//! ```
//! use sos_types::{Cell, Letter, Mode, Player};
//!
//! assert_eq!(Player::Blue.default_letter(), Letter::S);
//! assert_eq!(Player::Blue.opponent(), Player::Red);
//!
//! assert_eq!(Mode::from_str("General"), Some(Mode::General));
//! assert_eq!(Cell::from(Letter::O).as_char(), 'O');
//! assert_eq!(Cell::Empty.as_char(), '-');
//! ```

/// Smallest supported board size (one line fits exactly)
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board size
pub const MAX_BOARD_SIZE: usize = 20;

/// Board size used when none is configured
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Number of cells in a line
pub const LINE_LEN: usize = 3;

/// Upper bound on lines a single placement can complete.
///
/// An `S` can be the end of one line in each of the 8 directions; an `O` can
/// be the middle of at most 4 (one per axis).
pub const MAX_LINES_PER_MOVE: usize = 8;

/// The two letters a player can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    S,
    O,
}

impl Letter {
    /// Both letters, in the order candidates are explored
    pub const ALL: [Letter; 2] = [Letter::S, Letter::O];

    /// Parse letter from string (case-insensitive)
    ///
    /// ```
    /// use sos_types::Letter;
    ///
    /// assert_eq!(Letter::from_str("s"), Some(Letter::S));
    /// assert_eq!(Letter::from_str("O"), Some(Letter::O));
    /// assert_eq!(Letter::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Some(Letter::S),
            "O" => Some(Letter::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::S => "S",
            Letter::O => "O",
        }
    }

    /// The other letter
    pub fn flip(self) -> Self {
        match self {
            Letter::S => Letter::O,
            Letter::O => Letter::S,
        }
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Letter),
}

impl Cell {
    /// Display character: `-` for empty, otherwise the letter
    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Filled(Letter::S) => 'S',
            Cell::Filled(Letter::O) => 'O',
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn letter(&self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Filled(letter) => Some(*letter),
        }
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        Cell::Filled(letter)
    }
}

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// Letter placed when a move does not name one
    pub fn default_letter(self) -> Letter {
        match self {
            Player::Blue => Letter::S,
            Player::Red => Letter::O,
        }
    }

    /// Index into per-player arrays (`Blue = 0`, `Red = 1`)
    pub fn index(self) -> usize {
        match self {
            Player::Blue => 0,
            Player::Red => 1,
        }
    }

    /// Parse player name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Some(Player::Blue),
            "red" => Some(Player::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Blue => "Blue",
            Player::Red => "Red",
        }
    }
}

/// Game variant
///
/// - **Simple**: the first completed line wins immediately
/// - **General**: lines score points; the game ends when the board is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Simple,
    General,
}

impl Mode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Some(Mode::Simple),
            "general" => Some(Mode::General),
            _ => None,
        }
    }

    /// Lowercase name, as used in log files
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::General => "general",
        }
    }
}

/// Board coordinate
///
/// Ordering is row-major (`row` first, then `col`), which is the fixed order
/// used to canonicalize lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `(dr, dc)`; `None` if the result would be negative
    pub fn offset(self, dr: isize, dc: isize, steps: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr * steps)?;
        let col = self.col.checked_add_signed(dc * steps)?;
        Some(Coord { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Result of applying a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game goes on
    Continue,
    /// Terminal: the given player won
    Winner(Player),
    /// Terminal: nobody won
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Continue => "continue",
            Outcome::Winner(Player::Blue) => "blue_wins",
            Outcome::Winner(Player::Red) => "red_wins",
            Outcome::Draw => "draw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letters() {
        assert_eq!(Player::Blue.default_letter(), Letter::S);
        assert_eq!(Player::Red.default_letter(), Letter::O);
    }

    #[test]
    fn test_coord_ordering_is_row_major() {
        assert!(Coord::new(0, 5) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 2));
    }

    #[test]
    fn test_coord_offset_rejects_negative() {
        assert_eq!(Coord::new(0, 0).offset(-1, 0, 1), None);
        assert_eq!(Coord::new(2, 2).offset(-1, 1, 2), Some(Coord::new(0, 4)));
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Continue.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Winner(Player::Red).is_terminal());
    }

    #[test]
    fn test_parse_round_trip() {
        for mode in [Mode::Simple, Mode::General] {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
        for player in [Player::Blue, Player::Red] {
            assert_eq!(Player::from_str(player.as_str()), Some(player));
        }
        assert_eq!(Letter::S.flip(), Letter::O);
    }
}
