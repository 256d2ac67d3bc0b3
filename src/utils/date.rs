use chrono::{Days, Local, NaiveDate, NaiveDateTime};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `offset` days before `date`.
pub fn days_back(date: NaiveDate, offset: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse a pinned clock value (`YYYY-MM-DD HH:MM`).
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M").ok()
}

/// `16 October 2026, 14:05`
pub fn long_date_time(dt: NaiveDateTime) -> String {
    dt.format("%d %B %Y, %H:%M").to_string()
}

/// `October 15, Thursday`
pub fn long_day(date: NaiveDate) -> String {
    date.format("%B %d, %A").to_string()
}
