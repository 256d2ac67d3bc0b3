//! Day table rendering.

use crate::models::{DayLog, Entry, EntryKind, LogType};
use crate::ui::i18n::{Language, Msg, text};
use crate::utils::formatting::pad_right;
use ansi_term::{Colour, Style};

/// Width of the `*` placeholder shown for entries without a task.
pub const MIN_TASK_WIDTH: usize = 9;
const TASK_MARGIN: usize = 3;

pub fn task_width(log: &DayLog) -> usize {
    log.max_task_length().max(MIN_TASK_WIDTH)
}

pub fn default_message(kind: EntryKind, lang: Language) -> &'static str {
    match kind {
        EntryKind::Start => text(lang, Msg::StartWork),
        EntryKind::Log => text(lang, Msg::NoMessage),
        EntryKind::Pause => text(lang, Msg::PauseStart),
        EntryKind::Resume => text(lang, Msg::PauseEnd),
        EntryKind::Finish => text(lang, Msg::FinishWork),
    }
}

fn style_for(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Start => Colour::Green.normal(),
        EntryKind::Pause | EntryKind::Resume => Colour::Yellow.normal(),
        EntryKind::Finish => Colour::Red.normal(),
        EntryKind::Log => Style::new(),
    }
}

fn grey() -> Style {
    Colour::Fixed(8).normal()
}

/// Marker after the time telling how it was derived.
fn log_type_marker(log_type: LogType) -> &'static str {
    match log_type {
        LogType::Current | LogType::Exact => " ",
        LogType::Increment => "+",
        LogType::Fill => "=",
    }
}

/// One table row: `TIME  TASK  MESSAGE`.
pub fn entry_row(entry: &Entry, task_width: usize, lang: Language) -> String {
    let style = style_for(entry.kind);
    let time = style.paint(entry.time_str());
    let marker = grey().paint(log_type_marker(entry.log_type));

    let column = task_width + TASK_MARGIN;
    let task = match (entry.kind, entry.task_str()) {
        (EntryKind::Log, Some(task)) => pad_right(task, column),
        (EntryKind::Log, None) => grey()
            .paint(pad_right(&"*".repeat(task_width), column))
            .to_string(),
        (kind, _) => style.paint(pad_right(&kind.label(), column)).to_string(),
    };

    let message = match &entry.message {
        Some(m) => style.paint(m.as_str()).to_string(),
        None if entry.kind.is_log() => grey().paint(default_message(entry.kind, lang)).to_string(),
        None => style.paint(default_message(entry.kind, lang)).to_string(),
    };

    format!("{}{}  {}{}", time, marker, task, message)
}

/// Print every entry; `numbered` prefixes the 1-based index used by `edit`.
pub fn print_log(log: &DayLog, lang: Language, numbered: bool) {
    let width = task_width(log);
    println!();
    for (i, entry) in log.entries.iter().enumerate() {
        let row = entry_row(entry, width, lang);
        if numbered {
            let prefix = pad_right(&format!("[{}]", i + 1), 6);
            println!("{}{}", Colour::Green.paint(prefix), row);
        } else {
            println!("{}", row);
        }
    }
}

/// Print a single entry aligned with the rest of its log.
pub fn print_entry(entry: &Entry, log: &DayLog, lang: Language) {
    println!("\n{}", entry_row(entry, task_width(log), lang));
}
