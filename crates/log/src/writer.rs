//! Move log writer - synchronous, append-only recording
//!
//! Every append rewrites the whole document: serialize to `<path>.tmp`, fsync, then
//! rename over `<path>`. A crash mid-write leaves the previous complete log in
//! place. Total I/O is quadratic in the number of moves, which is fine for boards
//! of at most 400 cells.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::LogError;
use crate::format::ReplayLog;
use crate::types::Mode;
use sos_core::MoveRecord;

/// An open recording bound to one file path
#[derive(Debug)]
pub struct MoveLog {
    path: PathBuf,
    log: ReplayLog,
}

impl MoveLog {
    /// Open a new log at `path`, replacing anything already there.
    ///
    /// `history` seeds the move list so a recording started mid-game still
    /// replays from an empty board.
    pub fn start(
        path: impl AsRef<Path>,
        size: usize,
        mode: Mode,
        history: &[MoveRecord],
    ) -> Result<Self, LogError> {
        let mut log = ReplayLog::new(size, mode);
        log.moves.extend_from_slice(history);
        let this = Self {
            path: path.as_ref().to_path_buf(),
            log,
        };
        this.flush()?;
        info!(path = %this.path.display(), size, mode = mode.as_str(), "recording started");
        Ok(this)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self) -> &ReplayLog {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.moves.is_empty()
    }

    /// Append one move and persist the full log before returning
    pub fn append(&mut self, record: MoveRecord) -> Result<(), LogError> {
        self.log.moves.push(record);
        self.flush()
    }

    /// Detach from the file; the log on disk is already complete
    pub fn stop(self) -> ReplayLog {
        info!(path = %self.path.display(), moves = self.log.moves.len(), "recording stopped");
        self.log
    }

    fn flush(&self) -> Result<(), LogError> {
        let json = self.log.to_json()?;
        let tmp = tmp_path(&self.path);
        let write_err = |source| LogError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&tmp).map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        debug!(path = %self.path.display(), moves = self.log.moves.len(), "log flushed");
        Ok(())
    }
}

/// Read and validate a log file
pub fn load(path: impl AsRef<Path>) -> Result<ReplayLog, LogError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|source| LogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ReplayLog::from_json(&s)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}
