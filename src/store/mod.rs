//! File-backed storage of day logs: one JSON file per calendar date.

pub mod format;

use crate::errors::AppResult;
use crate::models::DayLog;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub const FILE_EXTENSION: &str = "json";

pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return the full path of the log file for `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(format!("{}.{}", date.format("%Y-%m-%d"), FILE_EXTENSION))
    }

    pub fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).is_file()
    }

    /// Load the log for `date`, or an empty one when no file exists yet.
    pub fn load(&self, date: NaiveDate) -> AppResult<DayLog> {
        let path = self.path_for(date);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no log file, starting empty");
            return Ok(DayLog::new(date));
        }

        let raw = fs::read_to_string(&path)?;
        let log = format::decode(&raw)?;
        tracing::debug!(path = %path.display(), entries = log.len(), "loaded day log");
        Ok(log)
    }

    /// Persist the whole log.
    ///
    /// The content goes to a temp file in the same directory which is then
    /// renamed over the target, so an interrupted save never leaves a
    /// half-written log behind.
    pub fn save(&self, log: &DayLog) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(log.date);
        let content = format::encode(log)?;

        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), entries = log.len(), "saved day log");
        Ok(())
    }

    /// Remove the log file for `date` entirely.
    pub fn terminate(&self, date: NaiveDate) -> AppResult<()> {
        let path = self.path_for(date);
        if path.is_file() {
            fs::remove_file(&path)?;
            tracing::debug!(path = %path.display(), "removed day log");
        }
        Ok(())
    }
}
