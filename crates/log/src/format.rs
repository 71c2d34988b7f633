//! Log format - JSON schema for recorded games
//!
//! ```json
//! {
//!   "format": "sos-log-json-v1",
//!   "size": 5,
//!   "mode": "general",
//!   "moves": [ {"row": 0, "col": 0, "letter": "S", "player": "Blue"} ]
//! }
//! ```
//!
//! Wire enums mirror the domain enums so the schema spelling stays local to this
//! module.

use serde::{Deserialize, Serialize};

use crate::error::LogError;
use crate::types::{Letter, Mode, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use sos_core::MoveRecord;

/// Format tag written to and required from every log
pub const LOG_FORMAT: &str = "sos-log-json-v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireLetter {
    #[serde(rename = "S")]
    S,
    #[serde(rename = "O")]
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WirePlayer {
    #[serde(rename = "Blue")]
    Blue,
    #[serde(rename = "Red")]
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireMode {
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "general")]
    General,
}

impl From<Letter> for WireLetter {
    fn from(value: Letter) -> Self {
        match value {
            Letter::S => WireLetter::S,
            Letter::O => WireLetter::O,
        }
    }
}

impl From<WireLetter> for Letter {
    fn from(value: WireLetter) -> Self {
        match value {
            WireLetter::S => Letter::S,
            WireLetter::O => Letter::O,
        }
    }
}

impl From<Player> for WirePlayer {
    fn from(value: Player) -> Self {
        match value {
            Player::Blue => WirePlayer::Blue,
            Player::Red => WirePlayer::Red,
        }
    }
}

impl From<WirePlayer> for Player {
    fn from(value: WirePlayer) -> Self {
        match value {
            WirePlayer::Blue => Player::Blue,
            WirePlayer::Red => Player::Red,
        }
    }
}

impl From<Mode> for WireMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Simple => WireMode::Simple,
            Mode::General => WireMode::General,
        }
    }
}

impl From<WireMode> for Mode {
    fn from(value: WireMode) -> Self {
        match value {
            WireMode::Simple => Mode::Simple,
            WireMode::General => Mode::General,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMove {
    pub row: usize,
    pub col: usize,
    pub letter: WireLetter,
    pub player: WirePlayer,
}

impl From<&MoveRecord> for LogMove {
    fn from(m: &MoveRecord) -> Self {
        Self {
            row: m.row,
            col: m.col,
            letter: m.letter.into(),
            player: m.player.into(),
        }
    }
}

impl From<LogMove> for MoveRecord {
    fn from(m: LogMove) -> Self {
        Self {
            row: m.row,
            col: m.col,
            letter: m.letter.into(),
            player: m.player.into(),
        }
    }
}

/// On-disk document.
///
/// `format` is optional at parse time so that a missing tag is reported as an
/// unsupported format rather than a generic parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub size: usize,
    pub mode: WireMode,
    #[serde(default)]
    pub moves: Vec<LogMove>,
}

/// A validated game log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLog {
    pub size: usize,
    pub mode: Mode,
    pub moves: Vec<MoveRecord>,
}

impl ReplayLog {
    pub fn new(size: usize, mode: Mode) -> Self {
        Self {
            size,
            mode,
            moves: Vec::new(),
        }
    }

    /// Parse and validate a log document
    pub fn from_json(s: &str) -> Result<Self, LogError> {
        // Check the tag before the body so foreign documents are named as such.
        let value: serde_json::Value = serde_json::from_str(s)?;
        match value.get("format").and_then(|v| v.as_str()) {
            Some(LOG_FORMAT) => {}
            other => {
                return Err(LogError::UnsupportedFormat {
                    found: other.map(str::to_string),
                })
            }
        }

        let doc: LogDocument = serde_json::from_value(value)?;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&doc.size) {
            return Err(LogError::InvalidSize(doc.size));
        }

        Ok(Self {
            size: doc.size,
            mode: doc.mode.into(),
            moves: doc.moves.into_iter().map(MoveRecord::from).collect(),
        })
    }

    pub fn to_document(&self) -> LogDocument {
        LogDocument {
            format: Some(LOG_FORMAT.to_string()),
            size: self.size,
            mode: self.mode.into(),
            moves: self.moves.iter().map(LogMove::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schema_example() {
        let s = r#"{"format":"sos-log-json-v1","size":5,"mode":"general",
            "moves":[{"row":0,"col":1,"letter":"O","player":"Blue"}]}"#;
        let log = ReplayLog::from_json(s).unwrap();
        assert_eq!(log.size, 5);
        assert_eq!(log.mode, Mode::General);
        assert_eq!(
            log.moves,
            vec![MoveRecord {
                row: 0,
                col: 1,
                letter: Letter::O,
                player: Player::Blue
            }]
        );
    }

    #[test]
    fn missing_tag_is_unsupported() {
        let s = r#"{"size":3,"mode":"simple","moves":[]}"#;
        assert!(matches!(
            ReplayLog::from_json(s),
            Err(LogError::UnsupportedFormat { found: None })
        ));
    }

    #[test]
    fn foreign_tag_is_unsupported() {
        let s = r#"{"format":"sos-log-json-v2","size":3,"mode":"simple","moves":[]}"#;
        match ReplayLog::from_json(s) {
            Err(LogError::UnsupportedFormat { found }) => {
                assert_eq!(found.as_deref(), Some("sos-log-json-v2"))
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_letter_and_size() {
        let s = r#"{"format":"sos-log-json-v1","size":3,"mode":"simple",
            "moves":[{"row":0,"col":0,"letter":"X","player":"Blue"}]}"#;
        assert!(matches!(ReplayLog::from_json(s), Err(LogError::Parse(_))));

        let s = r#"{"format":"sos-log-json-v1","size":2,"mode":"simple","moves":[]}"#;
        assert!(matches!(ReplayLog::from_json(s), Err(LogError::InvalidSize(2))));
    }

    #[test]
    fn document_writes_tag_and_lowercase_mode() {
        let log = ReplayLog::new(4, Mode::Simple);
        let v: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(v["format"], LOG_FORMAT);
        assert_eq!(v["mode"], "simple");
        assert_eq!(v["moves"].as_array().map(Vec::len), Some(0));
    }
}
