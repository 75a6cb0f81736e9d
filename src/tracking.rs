//! Append-only JSON-lines log of passages and roots the analyzer could not
//! resolve, plus per-type statistics over that log.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::engine::diagnostics::{UnresolvedObserver, UnresolvedReason};

/// Error type recorded when a passage could not be parsed at all
pub const PARSE_ERROR: &str = "parse_error";

/// One line of the failure log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub timestamp: DateTime<Utc>,
    pub sentence: String,
    pub error_type: String,
    #[serde(default)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl FailureRecord {
    pub fn new(sentence: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            sentence: sentence.into(),
            error_type: error_type.into(),
            details: serde_json::Map::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

/// Thread-safe failure log. Writes never fail the caller.
#[derive(Debug)]
pub struct FailureLog {
    path: PathBuf,
    writer: Mutex<File>,
}

impl FailureLog {
    /// Create or open the log for appending
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        log::debug!("Failure log opened at {}", path.display());
        Ok(Self {
            path,
            writer: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record; I/O problems are logged and dropped
    pub fn record(&self, record: &FailureRecord) {
        if let Err(e) = self.write_line(record) {
            log::warn!("Failed to write failure log {}: {}", self.path.display(), e);
        }
    }

    fn write_line(&self, record: &FailureRecord) -> Result<()> {
        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Count records per error type. Malformed lines are skipped and a
    /// missing file yields empty stats.
    pub fn stats(path: impl AsRef<Path>) -> Result<BTreeMap<String, usize>> {
        let path = path.as_ref();
        let mut stats = BTreeMap::new();
        if !path.exists() {
            return Ok(stats);
        }

        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: serde_json::Value = match serde_json::from_str(&line) {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            let error_type = entry
                .get("error_type")
                .and_then(|t| t.as_str())
                .unwrap_or("unknown")
                .to_string();
            *stats.entry(error_type).or_insert(0) += 1;
        }
        Ok(stats)
    }
}

impl UnresolvedObserver for FailureLog {
    fn on_unresolved(&self, sentence_text: &str, reason: UnresolvedReason) {
        let record = FailureRecord::new(sentence_text, reason.code())
            .with_detail("reason", reason.description());
        self.record(&record);
    }
}
