use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write log {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read log {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed log: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported log format: {}", .found.as_deref().unwrap_or("<missing>"))]
    UnsupportedFormat { found: Option<String> },
    #[error("log records unsupported board size {0}")]
    InvalidSize(usize),
}

impl LogError {
    pub fn code(&self) -> &'static str {
        match self {
            LogError::Write { .. } => "log_write_failure",
            LogError::Read { .. } => "log_read_failure",
            LogError::Parse(_) | LogError::InvalidSize(_) => "malformed_log",
            LogError::UnsupportedFormat { .. } => "unsupported_log_format",
        }
    }
}
