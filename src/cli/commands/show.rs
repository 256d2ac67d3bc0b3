use super::Context;
use crate::core::command_parser::ParsedCommand;
use crate::core::summary::summarize;
use crate::errors::AppResult;
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{header, info};
use crate::ui::render::print_log;
use crate::utils::date::{long_date_time, long_day};
use crate::utils::mins2readable;
use chrono::NaiveDate;

/// Show the day table (no arguments).
pub fn handle(parsed: &ParsedCommand, ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let lang = ctx.lang();
    if !ctx.store.exists(date) {
        info(text(lang, Msg::NoLogForDay));
        return Ok(());
    }
    let log = ctx.store.load(date)?;

    if parsed.day_offset == 0 {
        header(long_date_time(ctx.now));
    } else {
        header(format!("{}: {}", text(lang, Msg::Date), long_day(date)));
        info(format!(
            "{}: {}",
            text(lang, Msg::File),
            ctx.store.path_for(date).display()
        ));
    }

    print_log(&log, lang, false);

    let summary = summarize(&log);
    println!();
    println!(
        "{}: {}   {}: {}",
        text(lang, Msg::Worked),
        mins2readable(summary.worked_minutes, false),
        text(lang, Msg::Paused),
        mins2readable(summary.paused_minutes, false),
    );
    Ok(())
}
