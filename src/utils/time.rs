//! Time utilities: parsing HH:MM / HHMM, minute arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a compact `HHMM` token (exactly four digits).
pub fn parse_compact(t: &str) -> Option<NaiveTime> {
    if t.len() != 4 || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour = t[..2].parse().ok()?;
    let minute = t[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Accepts both `HHMM` and `HH:MM`, as typed during edits.
pub fn parse_user_time(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    parse_compact(t)
        .or_else(|| parse_time(t))
        .ok_or_else(|| AppError::InvalidTimeFormat(t.to_string()))
}

pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Same-day arithmetic: wraps around midnight, never changes the date.
/// Any `i64` is accepted; whole days are dropped first.
pub fn add_minutes(t: NaiveTime, minutes: i64) -> NaiveTime {
    let within_day = Duration::minutes(minutes.rem_euclid(MINUTES_PER_DAY));
    let (shifted, _) = t.overflowing_add_signed(within_day);
    shifted
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Serde adapter storing times as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
    }
}
