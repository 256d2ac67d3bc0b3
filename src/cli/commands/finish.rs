use super::{Context, ensure_open, record, resolve_time};
use crate::core::command_parser::ParsedCommand;
use crate::core::summary::summarize;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryKind};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{info, success};
use crate::utils::mins2readable;
use chrono::NaiveDate;

/// Close the work day.
pub fn handle(parsed: &ParsedCommand, ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let lang = ctx.lang();
    let mut log = ctx.store.load(date)?;
    ensure_open(&log)?;
    if log.is_on_pause() {
        return Err(AppError::OnPause);
    }

    let time = resolve_time(ctx, parsed.time_mode, &log)?;
    record(ctx, &mut log, Entry::new(EntryKind::Finish, time, parsed.log_type()))?;
    success(text(lang, Msg::DayEnded));

    let summary = summarize(&log);
    info(format!(
        "{}: {} | {}: {}",
        text(lang, Msg::Worked),
        mins2readable(summary.worked_minutes, false),
        text(lang, Msg::Paused),
        mins2readable(summary.paused_minutes, false),
    ));
    Ok(())
}
