//! SOS game (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces that
//! sit on top of them: configuration, computer-vs-computer play and paced replay.

pub use sos_ai as ai;
pub use sos_core as core;
pub use sos_engine as engine;
pub use sos_log as log;
pub use sos_types as types;

pub mod autoplay;
pub mod config;
pub mod playback;

pub use config::GameConfig;
