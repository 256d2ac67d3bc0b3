use crate::models::{DayLog, EntryKind};
use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Aggregated figures of one day log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub started: Option<NaiveTime>,
    pub finished: Option<NaiveTime>,
    pub last: Option<NaiveTime>,
    pub worked_minutes: i64,
    pub paused_minutes: i64,
    pub on_pause: bool,
}

/// A closed pause: start, end and length in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseSpan {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub minutes: i64,
}

pub fn summarize(log: &DayLog) -> DaySummary {
    let started = log.start().map(|e| e.time);
    let finished = log
        .entries
        .iter()
        .rev()
        .find(|e| e.kind == EntryKind::Finish)
        .map(|e| e.time);
    let last = log.last_time();

    let paused_minutes: i64 = pauses(log).iter().map(|p| p.minutes).sum();

    // Up to the finish, or to the last entry while the day is open.
    let worked_minutes = match (started, finished.or(last)) {
        (Some(s), Some(e)) => (minutes_between(s, e) - paused_minutes).max(0),
        _ => 0,
    };

    DaySummary {
        started,
        finished,
        last,
        worked_minutes,
        paused_minutes,
        on_pause: log.is_on_pause(),
    }
}

/// Worked minutes as of `now`: an open day that is not on pause keeps
/// counting past its last entry. Without `now` this is `worked_minutes`.
pub fn worked_until(log: &DayLog, now: Option<NaiveTime>) -> i64 {
    let summary = summarize(log);
    match (now, summary.started, summary.last) {
        (Some(now), Some(_), Some(last))
            if summary.finished.is_none() && !summary.on_pause && now > last =>
        {
            summary.worked_minutes + minutes_between(last, now)
        }
        _ => summary.worked_minutes,
    }
}

/// Every PAUSE followed by a RESUME.
pub fn pauses(log: &DayLog) -> Vec<PauseSpan> {
    let mut out = Vec::new();
    let mut open: Option<NaiveTime> = None;

    for entry in &log.entries {
        match entry.kind {
            EntryKind::Pause => open = Some(entry.time),
            EntryKind::Resume => {
                if let Some(start) = open.take() {
                    out.push(PauseSpan {
                        start,
                        end: entry.time,
                        minutes: minutes_between(start, entry.time).max(0),
                    });
                }
            }
            _ => {}
        }
    }

    out
}

/// The pause closed by the last entry, if the last entry is a RESUME.
pub fn last_pause(log: &DayLog) -> Option<PauseSpan> {
    match log.last() {
        Some(e) if e.kind == EntryKind::Resume => pauses(log).pop(),
        _ => None,
    }
}
