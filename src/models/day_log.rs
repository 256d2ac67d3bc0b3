use super::{entry::Entry, entry_kind::EntryKind};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use unicode_width::UnicodeWidthStr;

/// Ordered entries of one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
}

impl DayLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    pub fn with_entries(date: NaiveDate, entries: Vec<Entry>) -> Self {
        Self { date, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn last_time(&self) -> Option<NaiveTime> {
        self.last().map(|e| e.time)
    }

    pub fn get(&self, index: usize) -> AppResult<&Entry> {
        self.entries
            .get(index)
            .ok_or_else(|| AppError::InvalidEntrySelection((index + 1).to_string()))
    }

    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn replace(&mut self, index: usize, entry: Entry) -> AppResult<Entry> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::InvalidEntrySelection((index + 1).to_string()))?;
        Ok(std::mem::replace(slot, entry))
    }

    pub fn delete(&mut self, index: usize) -> AppResult<Entry> {
        if index >= self.entries.len() {
            return Err(AppError::InvalidEntrySelection((index + 1).to_string()));
        }
        Ok(self.entries.remove(index))
    }

    /// Removes the last entry (used by `undo`).
    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Longest task string, for column alignment. Never persisted.
    pub fn max_task_length(&self) -> usize {
        self.entries
            .iter()
            .filter_map(Entry::task_str)
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }

    pub fn start(&self) -> Option<&Entry> {
        self.entries.iter().find(|e| e.kind == EntryKind::Start)
    }

    pub fn is_on_pause(&self) -> bool {
        matches!(self.last(), Some(e) if e.kind == EntryKind::Pause)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.last(), Some(e) if e.kind == EntryKind::Finish)
    }
}
