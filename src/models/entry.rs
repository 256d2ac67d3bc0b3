use super::{entry_kind::EntryKind, log_type::LogType, task_ref::TaskRef};
use crate::utils::time::hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One timestamped record of a day log.
///
/// Entries are never mutated in place: edits build a modified copy through
/// the `with_*` helpers and replace the stored entry wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub kind: EntryKind,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(default)]
    pub log_type: LogType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Entry {
    pub fn new(kind: EntryKind, time: NaiveTime, log_type: LogType) -> Self {
        Self {
            kind,
            time,
            log_type,
            task: None,
            message: None,
        }
    }

    /// Task log entry.
    pub fn log(
        time: NaiveTime,
        log_type: LogType,
        task: Option<TaskRef>,
        message: Option<String>,
    ) -> Self {
        Self {
            kind: EntryKind::Log,
            time,
            log_type,
            task,
            message,
        }
    }

    pub fn with_time(&self, time: NaiveTime) -> Self {
        Self {
            time,
            ..self.clone()
        }
    }

    pub fn with_task(&self, task: Option<TaskRef>) -> Self {
        Self {
            task,
            ..self.clone()
        }
    }

    pub fn with_message(&self, message: Option<String>) -> Self {
        Self {
            message,
            ..self.clone()
        }
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn task_str(&self) -> Option<&str> {
        self.task.as_ref().map(TaskRef::as_str)
    }
}
