//! Automated player - heuristic alpha-beta search
//!
//! The heuristic counts "open opportunities": for each side, how many empty cells
//! would complete a line if that side's letter were placed there. A position is
//! scored as the searching side's opportunities minus the opponent's.
//!
//! # Example
//!
//! ```
//! use sos_ai::{SearchConfig, SearchPlayer};
//! use sos_core::GameState;
//! use sos_core::types::{Mode, Player};
//!
//! let mut game = GameState::new(3, Mode::Simple).unwrap();
//! game.apply_move(0, 0, None).unwrap();
//!
//! let ai = SearchPlayer::new(Player::Red, SearchConfig::default());
//! let m = ai.choose_move(&game).expect("board has empty cells");
//! assert!(game.is_valid_move(m.row, m.col));
//! ```

pub mod search;

pub use sos_types as types;

pub use search::{evaluate, potential, Move, SearchConfig, SearchPlayer, SearchResult};
