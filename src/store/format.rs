//! On-disk layout of a day log.
//!
//! ```json
//! {"version":1,"date":"2026-10-16","entries":[{"kind":"start","time":"09:00","log_type":"current"}]}
//! ```
//!
//! Readers ignore unknown fields and refuse files written by a newer
//! format version.

use crate::errors::{AppError, AppResult};
use crate::models::{DayLog, Entry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct LogFile {
    pub version: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl LogFile {
    pub fn from_log(log: &DayLog) -> Self {
        Self {
            version: FORMAT_VERSION,
            date: log.date,
            entries: log.entries.clone(),
        }
    }

    pub fn into_log(self) -> DayLog {
        DayLog::with_entries(self.date, self.entries)
    }
}

pub fn encode(log: &DayLog) -> AppResult<String> {
    let mut out = serde_json::to_string_pretty(&LogFile::from_log(log))?;
    out.push('\n');
    Ok(out)
}

pub fn decode(raw: &str) -> AppResult<DayLog> {
    let file: LogFile = serde_json::from_str(raw)?;
    if file.version > FORMAT_VERSION {
        return Err(AppError::UnsupportedFormat {
            found: file.version,
            supported: FORMAT_VERSION,
        });
    }
    Ok(file.into_log())
}
