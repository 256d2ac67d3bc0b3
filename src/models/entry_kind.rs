use serde::{Deserialize, Serialize};

/// Semantic kind of a persisted entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Start,
    Log,
    Pause,
    Resume,
    Finish,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Start => "start",
            EntryKind::Log => "log",
            EntryKind::Pause => "pause",
            EntryKind::Resume => "resume",
            EntryKind::Finish => "finish",
        }
    }

    /// Upper-case name shown in the task column for non-task entries.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn is_log(&self) -> bool {
        matches!(self, EntryKind::Log)
    }

    /// Entries `undo` is allowed to remove. Undoing FINISH reopens the day;
    /// START only goes away through `edit`.
    pub fn is_undoable(&self) -> bool {
        !matches!(self, EntryKind::Start)
    }
}
