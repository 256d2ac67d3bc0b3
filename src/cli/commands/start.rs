use super::{Context, record};
use crate::core::command_parser::{ParsedCommand, TimeMode};
use crate::core::time_resolver;
use crate::errors::AppResult;
use crate::models::{DayLog, Entry, EntryKind};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::success;
use chrono::NaiveDate;

pub fn handle(parsed: &ParsedCommand, ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    begin(ctx, date, parsed.time_mode)
}

/// Create the day log with its START entry.
pub fn begin(ctx: &Context, date: NaiveDate, mode: TimeMode) -> AppResult<()> {
    let mut log = DayLog::new(date);
    let time = time_resolver::resolve(mode, &log, ctx.now.time())?;

    record(ctx, &mut log, Entry::new(EntryKind::Start, time, mode.log_type()))?;

    success(format!(
        "{} {}",
        text(ctx.lang(), Msg::DayStarted),
        ctx.store.path_for(date).display()
    ));
    Ok(())
}
