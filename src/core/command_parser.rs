//! Turns raw CLI tokens into a fully resolved command.
//!
//! Resolution runs in a fixed order, each step removing the tokens it
//! consumed before the next one looks at what is left:
//!
//! 1. day offset (`y`, `yy`, `y3` as the last token)
//! 2. command word (first token only, full keyword or its first letter)
//! 3. time mode (`HHMM`, `+N`, `fill` as the last token)
//! 4. task reference (first token: digits, shorthand, `ABC-12`)
//! 5. message (everything left, `log` only)
//!
//! `help` and `time` take plain arguments and skip steps 3 to 5.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Command, LogType, TaskRef};
use crate::utils::time::parse_compact;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static DAY_OFFSET_REPEAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[yY]+$").unwrap());
static DAY_OFFSET_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[yY](\d+)$").unwrap());
static INCREMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+(\d+)$").unwrap());
static EXACT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static LETTERS_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)[-_.]?(\d+)$").unwrap());

/// How the time of the new entry is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeMode {
    Current,
    Exact(NaiveTime),
    Increment(i64),
    Fill,
}

impl TimeMode {
    pub fn log_type(&self) -> LogType {
        match self {
            TimeMode::Current => LogType::Current,
            TimeMode::Exact(_) => LogType::Exact,
            TimeMode::Increment(_) => LogType::Increment,
            TimeMode::Fill => LogType::Fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub day_offset: u32,
    pub time_mode: TimeMode,
    pub task: Option<TaskRef>,
    pub message: Option<String>,
    /// Tokens no step consumed (the topic of `help`, for instance).
    pub args: Vec<String>,
}

impl ParsedCommand {
    fn empty(day_offset: u32) -> Self {
        Self {
            command: Command::Empty,
            day_offset,
            time_mode: TimeMode::Current,
            task: None,
            message: None,
            args: Vec::new(),
        }
    }

    pub fn log_type(&self) -> LogType {
        self.time_mode.log_type()
    }
}

pub fn parse<S: AsRef<str>>(tokens: &[S], cfg: &Config) -> AppResult<ParsedCommand> {
    let mut words: Vec<&str> = tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    // 1. day offset
    let day_offset = match words.last().and_then(|w| detect_day_offset(w)) {
        Some(offset) => {
            words.pop();
            offset
        }
        None => 0,
    };

    // 2. command
    if words.is_empty() {
        return Ok(ParsedCommand::empty(day_offset));
    }
    let command = match Command::match_token(words[0]) {
        Some(cmd) => {
            words.remove(0);
            cmd
        }
        None => {
            refuse_one_symbol(words[0], cfg)?;
            Command::Log
        }
    };

    if command.takes_arguments() {
        let parsed = ParsedCommand {
            command,
            args: words.into_iter().map(str::to_string).collect(),
            ..ParsedCommand::empty(day_offset)
        };
        tracing::debug!(?parsed, "parsed command line");
        return Ok(parsed);
    }

    // 3. time mode; a lone digits token of a log is kept for the task
    let mut time_mode = TimeMode::Current;
    let lone_task_number =
        command == Command::Log && words.len() == 1 && DIGITS.is_match(words[0]);
    if !lone_task_number
        && let Some(last) = words.last()
        && let Some(mode) = detect_time_mode(last)?
    {
        time_mode = mode;
        words.pop();
    }

    // 4. task
    let mut task = None;
    let mut message = None;
    if let Some(first) = words.first()
        && let Some((resolved, default_message)) = resolve_task(first, cfg)
    {
        task = Some(resolved);
        message = default_message;
        words.remove(0);
    }

    // 5. message
    if command == Command::Log && message.is_none() && !words.is_empty() {
        message = Some(words.join(" "));
        words.clear();
    }

    let parsed = ParsedCommand {
        command,
        day_offset,
        time_mode,
        task,
        message,
        args: words.into_iter().map(str::to_string).collect(),
    };
    tracing::debug!(?parsed, "parsed command line");
    Ok(parsed)
}

/// A log whose first word is one repeated symbol (`x`, `zzz`) is almost
/// always a mistyped command.
fn refuse_one_symbol(token: &str, cfg: &Config) -> AppResult<()> {
    let mut chars = token.chars();
    let repeated = chars
        .next()
        .is_some_and(|first| chars.all(|c| c == first));
    if repeated && cfg.shorthand(token).is_none() {
        return Err(AppError::OneSymbolLog(token.to_string()));
    }
    Ok(())
}

fn detect_day_offset(token: &str) -> Option<u32> {
    if DAY_OFFSET_REPEAT.is_match(token) {
        return u32::try_from(token.len()).ok();
    }
    DAY_OFFSET_NUMBER
        .captures(token)
        .and_then(|c| c[1].parse().ok())
}

fn detect_time_mode(token: &str) -> AppResult<Option<TimeMode>> {
    if EXACT.is_match(token) {
        let t = parse_compact(token).ok_or_else(|| AppError::InvalidTimeFormat(token.into()))?;
        return Ok(Some(TimeMode::Exact(t)));
    }
    if let Some(c) = INCREMENT.captures(token) {
        let minutes = c[1]
            .parse()
            .map_err(|_| AppError::InvalidTimeFormat(token.into()))?;
        return Ok(Some(TimeMode::Increment(minutes)));
    }
    if token.eq_ignore_ascii_case("fill") {
        return Ok(Some(TimeMode::Fill));
    }
    Ok(None)
}

/// Resolve a task token: bare digits get the default project, then
/// configured shorthands, then `letters[-_.]digits`.
pub fn resolve_task(token: &str, cfg: &Config) -> Option<(TaskRef, Option<String>)> {
    if DIGITS.is_match(token) {
        return Some((TaskRef::from_parts(&cfg.default_project, token), None));
    }
    if let Some(shorthand) = cfg.shorthand(token) {
        return Some((TaskRef::new(shorthand.task.clone()), shorthand.message.clone()));
    }
    LETTERS_DIGITS.captures(token).map(|c| {
        (
            TaskRef::from_parts(&c[1].to_uppercase(), &c[2]),
            None,
        )
    })
}
