//! One handler per command, behind a precondition policy on the day log.

pub mod edit;
pub mod finish;
pub mod from;
pub mod help;
pub mod info;
pub mod log;
pub mod pause;
pub mod show;
pub mod start;
pub mod time;
pub mod undo;

use crate::config::Config;
use crate::core::command_parser::{ParsedCommand, TimeMode};
use crate::core::time_resolver;
use crate::errors::{AppError, AppResult};
use crate::models::{Command, DayLog, Entry};
use crate::store::LogStore;
use crate::ui::i18n::{Language, Msg, text};
use crate::ui::messages::warning;
use crate::ui::prompt::Prompter;
use crate::ui::render::print_entry;
use crate::utils::date::days_back;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Everything a handler needs, built once at startup.
pub struct Context<'a> {
    pub cfg: &'a Config,
    pub store: LogStore,
    pub now: NaiveDateTime,
    pub prompter: &'a mut dyn Prompter,
}

impl Context<'_> {
    pub fn lang(&self) -> Language {
        self.cfg.language
    }

    pub fn date_for(&self, day_offset: u32) -> NaiveDate {
        days_back(self.now.date(), day_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requirement {
    Nothing,
    LogMustExist,
    LogMustNotExist,
}

fn requirement(command: Command) -> Requirement {
    match command {
        Command::Start => Requirement::LogMustNotExist,
        Command::Empty | Command::Help | Command::Time => Requirement::Nothing,
        Command::Log
        | Command::From
        | Command::Finish
        | Command::Info
        | Command::Edit
        | Command::Undo
        | Command::Pause => Requirement::LogMustExist,
    }
}

/// Check the preconditions of `parsed.command` and run its handler.
pub fn execute(parsed: &ParsedCommand, ctx: &mut Context) -> AppResult<()> {
    let date = ctx.date_for(parsed.day_offset);

    match requirement(parsed.command) {
        Requirement::LogMustNotExist if ctx.store.exists(date) => {
            return Err(AppError::LogFileAlreadyExists(date));
        }
        Requirement::LogMustExist if !ctx.store.exists(date) => {
            offer_start(ctx, date, parsed.time_mode)?
        }
        _ => {}
    }

    match parsed.command {
        Command::Empty => show::handle(parsed, ctx, date),
        Command::Start => start::handle(parsed, ctx, date),
        Command::Log => log::handle(parsed, ctx, date),
        Command::Pause => pause::handle(parsed, ctx, date),
        Command::Finish => finish::handle(parsed, ctx, date),
        Command::Undo => undo::handle(ctx, date),
        Command::Edit => edit::handle(ctx, date),
        Command::Info => info::handle(ctx, date),
        Command::Help => help::handle(parsed),
        Command::Time => time::handle(parsed, ctx, date),
        Command::From => from::handle(parsed, ctx, date),
    }
}

/// A command needs a log that is not there: offer to start the day. An
/// explicit `HHMM` of the command also stamps the start; other modes need
/// an existing entry, so the start falls back to the clock.
fn offer_start(ctx: &mut Context, date: NaiveDate, mode: TimeMode) -> AppResult<()> {
    let question = text(ctx.lang(), Msg::FileNotFound);
    if ctx.prompter.confirm(question)? {
        let start_mode = match mode {
            TimeMode::Exact(_) => mode,
            _ => TimeMode::Current,
        };
        start::begin(ctx, date, start_mode)
    } else {
        Err(AppError::LogFileMissing(date))
    }
}

/// Refuse to extend a finished day.
fn ensure_open(log: &DayLog) -> AppResult<()> {
    if log.is_finished() {
        return Err(AppError::DayFinished);
    }
    Ok(())
}

/// Resolve the entry time, warning when it goes back in time.
fn resolve_time(ctx: &Context, mode: TimeMode, log: &DayLog) -> AppResult<NaiveTime> {
    let time = time_resolver::resolve(mode, log, ctx.now.time())?;
    if let Some(last) = log.last_time()
        && time < last
    {
        warning(format!(
            "{} ({})",
            text(ctx.lang(), Msg::EarlierThanLast),
            last.format("%H:%M")
        ));
    }
    Ok(time)
}

/// Append, persist and echo a new entry.
fn record(ctx: &Context, log: &mut DayLog, entry: Entry) -> AppResult<()> {
    log.append(entry);
    ctx.store.save(log)?;
    if let Some(saved) = log.last() {
        print_entry(saved, log, ctx.lang());
    }
    Ok(())
}
