use super::Context;
use crate::core::command_parser::ParsedCommand;
use crate::core::summary::worked_until;
use crate::errors::{AppError, AppResult};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::info;
use crate::utils::mins2readable;
use crate::utils::time::MINUTES_PER_DAY;
use chrono::NaiveDate;

/// Hours as typed by the user, `6.5` or `6,5`.
pub fn parse_hours(raw: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidTimeFormat(raw.to_string());
    let hours: f64 = raw.trim().replace(',', ".").parse().map_err(|_| invalid())?;
    let minutes = (hours * 60.0).round();
    if !(0.0..=MINUTES_PER_DAY as f64).contains(&minutes) {
        return Err(invalid());
    }
    Ok(minutes as i64)
}

/// Worked time against the working day: from the day log, or from a
/// number of hours given as argument.
pub fn handle(parsed: &ParsedCommand, ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let lang = ctx.lang();

    let worked = match parsed.args.first() {
        Some(raw) => parse_hours(raw)?,
        None => {
            if !ctx.store.exists(date) {
                info(text(lang, Msg::NoLogForDay));
                return Ok(());
            }
            let log = ctx.store.load(date)?;
            let now = (parsed.day_offset == 0).then(|| ctx.now.time());
            worked_until(&log, now)
        }
    };

    let remaining = ctx.cfg.workday_minutes - worked;
    println!("{}: {}", text(lang, Msg::Worked), mins2readable(worked, false));
    if remaining >= 0 {
        println!("{}: {}", text(lang, Msg::Remaining), mins2readable(remaining, false));
    } else {
        println!("{}: {}", text(lang, Msg::Overtime), mins2readable(-remaining, false));
    }
    Ok(())
}
