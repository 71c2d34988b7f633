//! Runtime configuration.
//!
//! Defaults can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SOS_SIZE` | 10 | Board size, clamped to 3..=20 |
//! | `SOS_MODE` | simple | `simple` or `general` |
//! | `SOS_SEARCH_PLY` | 1 | Search depth of automated players |
//! | `SOS_LOG_PATH` | unset | Record games to this file |
//! | `SOS_REPLAY_TICK_MS` | 500 | Delay between replayed moves |

use std::path::PathBuf;

use sos_ai::SearchConfig;
use sos_types::{Mode, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub mode: Mode,
    pub search: SearchConfig,
    pub log_path: Option<PathBuf>,
    pub replay_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            mode: Mode::Simple,
            search: SearchConfig::default(),
            log_path: None,
            replay_tick_ms: 500,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup; unparsable values keep defaults
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let size = lookup("SOS_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(clamp_size)
            .unwrap_or(defaults.size);

        let mode = lookup("SOS_MODE")
            .and_then(|s| Mode::from_str(s.trim()))
            .unwrap_or(defaults.mode);

        let max_ply = lookup("SOS_SEARCH_PLY")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .filter(|&ply| ply > 0)
            .unwrap_or(defaults.search.max_ply);

        let log_path = lookup("SOS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let replay_tick_ms = lookup("SOS_REPLAY_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.replay_tick_ms);

        Self {
            size,
            mode,
            search: SearchConfig {
                max_ply,
                ..defaults.search
            },
            log_path,
            replay_tick_ms,
        }
    }
}

pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE)
}
