//! Unified application error type.
//! Every module (config, store, core, cli, ui) returns AppError so the
//! top level can decide in one place what is a user-facing message and
//! what is a fatal failure.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage (fatal)
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Corrupt log file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported log file version {found} (this build reads up to {supported})")]
    UnsupportedFormat { found: u32, supported: u32 },

    // ---------------------------
    // Config errors (fatal)
    // ---------------------------
    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Command errors (recoverable)
    // ---------------------------
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Log file for {0} does not exist")]
    LogFileMissing(NaiveDate),

    #[error("Day {0} is already started")]
    LogFileAlreadyExists(NaiveDate),

    #[error("The log has no entries yet")]
    EmptyLog,

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid entry selection: {0}")]
    InvalidEntrySelection(String),

    #[error("Only task log entries can change {0}")]
    NotEditable(&'static str),

    #[error("Time of a fill entry cannot be edited")]
    FillTimeLocked,

    #[error("A pause is still open")]
    OnPause,

    #[error("The work day is already finished")]
    DayFinished,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Refusing to log a one-symbol task: {0}")]
    OneSymbolLog(String),

    #[error("Cannot read the last commit: {0}")]
    Git(String),
}

impl AppError {
    /// Storage, format and configuration failures have no safe recovery
    /// path mid-command; everything else is reported and exits cleanly.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_)
                | AppError::Json(_)
                | AppError::UnsupportedFormat { .. }
                | AppError::Yaml(_)
                | AppError::Config(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
