//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and line detection.
//! It has **no dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: The same move sequence always produces the same game
//! - **Testable**: Unit tests for every rule next to the code
//! - **Portable**: Usable from a terminal, a GUI, a replay, or a search
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with bounds-checked access
//! - [`lines`]: S-O-S line detection and the canonical-key dedup index
//! - [`rules`]: Simple/General transition table
//! - [`game_state`]: Turn, score, outcome and history bookkeeping
//! - [`error`]: Board and move errors
//!
//! # Game Rules
//!
//! - Blue moves first and places `S` unless the move names a letter; Red places `O`
//! - A line is three adjacent cells in a row, column or diagonal reading `S O S`
//! - **Simple**: the first line wins; a full board without one is a draw
//! - **General**: each line scores a point and the mover goes again; at a full
//!   board the higher score wins, equal scores draw
//!
//! # Example
//!
//! ```
//! use sos_core::GameState;
//! use sos_core::types::{Mode, Outcome, Player};
//!
//! let mut game = GameState::new(3, Mode::Simple).unwrap();
//! game.apply_move(0, 0, None).unwrap(); // Blue: S
//! game.apply_move(0, 1, None).unwrap(); // Red: O
//! game.apply_move(2, 2, None).unwrap(); // Blue: S
//! game.apply_move(2, 1, None).unwrap(); // Red: O
//!
//! // Blue completes the top row
//! assert_eq!(game.apply_move(0, 2, None), Ok(Outcome::Winner(Player::Blue)));
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod lines;
pub mod rules;

pub use sos_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{BoardError, MoveError};
pub use game_state::{GameState, MoveEvent, MoveRecord};
pub use lines::{count_lines_through, find_new_lines, DiscoveredLines, FoundLine, LineKey};
pub use rules::{final_standing, resolve, rules_for, ModeRules, Transition};
