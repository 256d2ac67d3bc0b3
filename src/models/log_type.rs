use serde::{Deserialize, Serialize};

/// How the time of an entry was derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    /// Invocation clock time.
    #[default]
    Current,
    /// Explicit `HHMM` token.
    Exact,
    /// `+N` minutes after the last entry.
    Increment,
    /// Same time as the last entry; never time-shifted.
    Fill,
}

impl LogType {
    pub fn is_fill(&self) -> bool {
        matches!(self, LogType::Fill)
    }
}
