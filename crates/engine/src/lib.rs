//! Game engine - live play and replay on top of the core state machine
//!
//! - [`GameEngine`]: owns a [`GameState`](sos_core::GameState) and an optional
//!   [`MoveLog`](sos_log::MoveLog); the single entry point for applying moves
//! - [`ReplayEngine`]: owns a `GameEngine` and feeds it moves from a loaded log
//!
//! A game is owned by exactly one of them at a time.

pub mod error;
pub mod game;
pub mod replay;

pub use sos_types as types;

pub use error::ReplayError;
pub use game::GameEngine;
pub use replay::ReplayEngine;
