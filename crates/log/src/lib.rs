//! Game log module - recording and loading move logs
//!
//! A log captures the board size, the mode and every accepted move in order.
//! That is enough to rebuild a game deterministically from an empty board.
//!
//! - [`format`]: the `sos-log-json-v1` document and its validation
//! - [`writer`]: [`MoveLog`], a crash-safe synchronous recorder, and [`load`]
//! - [`error`]: I/O, parse and format errors

pub mod error;
pub mod format;
pub mod writer;

pub use sos_types as types;

pub use error::LogError;
pub use format::{LogDocument, LogMove, ReplayLog, LOG_FORMAT};
pub use writer::{load, MoveLog};
