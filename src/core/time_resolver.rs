//! Computes the concrete time stamped on a new entry.

use crate::core::command_parser::TimeMode;
use crate::errors::{AppError, AppResult};
use crate::models::DayLog;
use crate::utils::time::{add_minutes, truncate_to_minute};
use chrono::NaiveTime;

pub fn resolve(mode: TimeMode, log: &DayLog, now: NaiveTime) -> AppResult<NaiveTime> {
    let resolved = match mode {
        TimeMode::Current => truncate_to_minute(now),
        TimeMode::Exact(t) => t,
        TimeMode::Fill => log.last_time().ok_or(AppError::EmptyLog)?,
        TimeMode::Increment(minutes) => {
            let last = log.last_time().ok_or(AppError::EmptyLog)?;
            add_minutes(last, minutes)
        }
    };
    tracing::debug!(?mode, time = %resolved.format("%H:%M"), "resolved entry time");
    Ok(resolved)
}
