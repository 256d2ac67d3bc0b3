//! Editing of already recorded entries.
//!
//! `EditEngine` is the pure part: it validates an action against the
//! selected entry, computes the resulting entry and the shift to apply to
//! the entries that follow, and commits it to a `DayLog`. `EditSession`
//! drives the interactive flow around it (select, action, value, confirm).

use crate::config::Config;
use crate::core::command_parser::resolve_task;
use crate::errors::{AppError, AppResult};
use crate::models::{DayLog, Entry, EntryKind, TaskRef};
use crate::store::LogStore;
use crate::ui::i18n::{Language, Msg, error_text, text};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::Prompter;
use crate::ui::render::{entry_row, print_log, task_width};
use crate::utils::time::{add_minutes, minutes_between, parse_user_time};
use crate::utils::mins2readable;
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    Task,
    Message,
    Delete,
}

impl Field {
    fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "t" | "time" => Some(Field::Time),
            "k" | "task" => Some(Field::Task),
            "m" | "msg" | "message" => Some(Field::Message),
            "d" | "del" | "delete" => Some(Field::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Time(NaiveTime),
    Task(Option<TaskRef>),
    Message(Option<String>),
    Delete,
}

impl EditAction {
    pub fn field(&self) -> Field {
        match self {
            EditAction::Time(_) => Field::Time,
            EditAction::Task(_) => Field::Task,
            EditAction::Message(_) => Field::Message,
            EditAction::Delete => Field::Delete,
        }
    }
}

/// A validated change, ready to be confirmed and applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub index: usize,
    pub before: Entry,
    /// `None` for deletions.
    pub after: Option<Entry>,
    /// Minutes added to every following entry.
    pub shift: Option<i64>,
    /// Deleting the START entry removes the whole day.
    pub terminates_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Declined,
    Terminated,
}

pub struct EditEngine;

impl EditEngine {
    /// Whether `field` may be changed on `entry`.
    pub fn ensure_editable(entry: &Entry, field: Field) -> AppResult<()> {
        match field {
            Field::Time if entry.log_type.is_fill() => Err(AppError::FillTimeLocked),
            Field::Task if !entry.kind.is_log() => Err(AppError::NotEditable("task")),
            Field::Message if !entry.kind.is_log() => Err(AppError::NotEditable("message")),
            _ => Ok(()),
        }
    }

    pub fn propose(log: &DayLog, index: usize, action: EditAction) -> AppResult<Proposal> {
        let before = log.get(index)?.clone();
        Self::ensure_editable(&before, action.field())?;

        let is_last = index + 1 == log.len();
        let shiftable = !is_last && !before.log_type.is_fill();

        let (after, shift) = match action {
            EditAction::Time(time) => {
                let shift = shiftable.then(|| minutes_between(before.time, time));
                (Some(before.with_time(time)), shift)
            }
            EditAction::Task(task) => (Some(before.with_task(task)), None),
            EditAction::Message(message) => (Some(before.with_message(message)), None),
            EditAction::Delete => {
                let previous = index.checked_sub(1).and_then(|i| log.entries.get(i));
                let shift = match previous {
                    Some(prev) if shiftable => Some(minutes_between(before.time, prev.time)),
                    _ => None,
                };
                (None, shift)
            }
        };

        Ok(Proposal {
            index,
            terminates_day: after.is_none() && before.kind == EntryKind::Start,
            before,
            after,
            shift: shift.filter(|m| *m != 0),
        })
    }

    /// Commit a proposal. Day termination is the caller's business: it
    /// removes the file instead of touching the entries.
    pub fn apply(log: &mut DayLog, proposal: &Proposal) -> AppResult<()> {
        let first_following = match &proposal.after {
            Some(entry) => {
                log.replace(proposal.index, entry.clone())?;
                proposal.index + 1
            }
            None => {
                log.delete(proposal.index)?;
                proposal.index
            }
        };

        if let Some(minutes) = proposal.shift {
            Self::shift_from(log, first_following, minutes);
        }
        Ok(())
    }

    /// Add `minutes` to every entry from `start` on. FILL entries keep
    /// their time.
    pub fn shift_from(log: &mut DayLog, start: usize, minutes: i64) {
        for entry in log.entries.iter_mut().skip(start) {
            if entry.log_type.is_fill() {
                continue;
            }
            *entry = entry.with_time(add_minutes(entry.time, minutes));
        }
        tracing::debug!(start, minutes, "shifted following entries");
    }
}

/// Interactive edit of one entry of a loaded log.
pub struct EditSession<'a, P: Prompter + ?Sized> {
    pub store: &'a LogStore,
    pub cfg: &'a Config,
    pub prompter: &'a mut P,
}

impl<P: Prompter + ?Sized> EditSession<'_, P> {
    fn lang(&self) -> Language {
        self.cfg.language
    }

    pub fn run(&mut self, log: &mut DayLog) -> AppResult<EditOutcome> {
        print_log(log, self.lang(), true);

        let Some(index) = self.select(log)? else {
            return Ok(EditOutcome::Declined);
        };
        let Some(proposal) = self.choose_action(log, index)? else {
            return Ok(EditOutcome::Declined);
        };

        if proposal.terminates_day {
            return self.terminate_day(log, &proposal);
        }

        self.show_proposal(log, &proposal);
        let question = if proposal.after.is_some() {
            Msg::ConfirmChange
        } else {
            Msg::ConfirmDelete
        };
        if !self.prompter.confirm(text(self.lang(), question))? {
            return Ok(EditOutcome::Declined);
        }

        EditEngine::apply(log, &proposal)?;
        self.store.save(log)?;
        Ok(EditOutcome::Saved)
    }

    /// Ask for a 1-based entry number until it is in range.
    fn select(&mut self, log: &DayLog) -> AppResult<Option<usize>> {
        loop {
            let Some(answer) = self.prompter.ask(text(self.lang(), Msg::SelectEntry))? else {
                return Ok(None);
            };
            match parse_selection(&answer, log.len()) {
                Ok(index) => return Ok(Some(index)),
                Err(e) => warning(error_text(self.lang(), &e)),
            }
        }
    }

    fn choose_action(&mut self, log: &DayLog, index: usize) -> AppResult<Option<Proposal>> {
        let entry = log.get(index)?.clone();
        loop {
            let Some(answer) = self.prompter.ask(text(self.lang(), Msg::SelectAction))? else {
                return Ok(None);
            };
            let Some(field) = Field::from_answer(&answer) else {
                warning(format!("{}: '{}'", text(self.lang(), Msg::SelectAction), answer));
                continue;
            };
            if let Err(e) = EditEngine::ensure_editable(&entry, field) {
                warning(error_text(self.lang(), &e));
                continue;
            }

            let Some(action) = self.read_value(field)? else {
                return Ok(None);
            };
            return EditEngine::propose(log, index, action).map(Some);
        }
    }

    fn read_value(&mut self, field: Field) -> AppResult<Option<EditAction>> {
        let lang = self.lang();
        match field {
            Field::Delete => Ok(Some(EditAction::Delete)),
            Field::Time => loop {
                let Some(answer) = self.prompter.ask(text(lang, Msg::EnterTime))? else {
                    return Ok(None);
                };
                match parse_user_time(&answer) {
                    Ok(time) => return Ok(Some(EditAction::Time(time))),
                    Err(e) => warning(error_text(lang, &e)),
                }
            },
            Field::Task => {
                let Some(answer) = self.prompter.ask(text(lang, Msg::EnterTask))? else {
                    return Ok(None);
                };
                Ok(Some(EditAction::Task(parse_task_input(&answer, self.cfg))))
            }
            Field::Message => {
                let Some(answer) = self.prompter.ask(text(lang, Msg::EnterMessage))? else {
                    return Ok(None);
                };
                let message = answer.trim();
                Ok(Some(EditAction::Message(
                    (!message.is_empty()).then(|| message.to_string()),
                )))
            }
        }
    }

    fn show_proposal(&self, log: &DayLog, proposal: &Proposal) {
        let lang = self.lang();
        let width = task_width(log);
        println!();
        println!(
            "{:<6}{}",
            text(lang, Msg::Before),
            entry_row(&proposal.before, width, lang)
        );
        if let Some(after) = &proposal.after {
            println!("{:<6}{}", text(lang, Msg::After), entry_row(after, width, lang));
        }
        if let Some(minutes) = proposal.shift {
            info(format!(
                "{} {}",
                text(lang, Msg::ShiftFollowing),
                mins2readable(minutes, true)
            ));
        }
    }

    fn terminate_day(&mut self, log: &DayLog, proposal: &Proposal) -> AppResult<EditOutcome> {
        let lang = self.lang();
        self.show_proposal(log, proposal);
        if !self.prompter.confirm(text(lang, Msg::ConfirmDeleteDay))? {
            return Ok(EditOutcome::Declined);
        }
        if !self.prompter.confirm(text(lang, Msg::ConfirmDeleteDayAgain))? {
            return Ok(EditOutcome::Declined);
        }
        self.store.terminate(log.date)?;
        Ok(EditOutcome::Terminated)
    }
}

/// 1-based display number to 0-based index.
pub fn parse_selection(answer: &str, len: usize) -> AppResult<usize> {
    let answer = answer.trim();
    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(AppError::InvalidEntrySelection(answer.to_string())),
    }
}

/// Same task syntax as the command line; anything else is kept verbatim.
fn parse_task_input(answer: &str, cfg: &Config) -> Option<TaskRef> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    Some(
        resolve_task(answer, cfg)
            .map(|(task, _)| task)
            .unwrap_or_else(|| TaskRef::new(answer)),
    )
}
