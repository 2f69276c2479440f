#![cfg(feature = "std")]
//! Append-only record store of game summaries, kept as a JSON list on disk.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use crate::statistics::StatisticsSummary;

/// Failure reading or writing the record store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("record store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("record store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON file holding one [`StatisticsSummary`] per finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStore {
    path: PathBuf,
}

impl SummaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `summary` to the stored list, creating the file and its parent
    /// directories when needed. Returns the number of entries now stored.
    ///
    /// Existing content that is not a JSON list is discarded and replaced by
    /// a fresh list.
    pub fn append(&self, summary: &StatisticsSummary) -> Result<usize, PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut entries = self.read_entries();
        entries.push(serde_json::to_value(summary)?);

        let json = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("cannot remove {}: {}", tmp.display(), cleanup);
                }
            }
            return Err(err.into());
        }
        debug!("appended summary #{} to {}", entries.len(), self.path.display());
        Ok(entries.len())
    }

    /// Every stored summary, oldest first. A missing or unreadable store is
    /// treated as empty.
    pub fn load(&self) -> Vec<StatisticsSummary> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no record store at {}", self.path.display());
                return Vec::new();
            }
            Err(err) => {
                warn!("cannot read record store {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(summaries) => summaries,
            Err(err) => {
                warn!("invalid JSON in record store {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    fn read_entries(&self) -> Vec<Value> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => return Vec::new(),
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!("cannot read record store {}: {}", self.path.display(), err);
                }
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("record store {} does not hold a list, starting over", self.path.display());
                Vec::new()
            }
            Err(err) => {
                warn!("invalid JSON in record store {}, starting over: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }
}

impl Default for SummaryStore {
    fn default() -> Self {
        Self::new(crate::config::STORE_PATH)
    }
}
