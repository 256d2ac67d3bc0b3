use super::{Context, ensure_open, record, resolve_time};
use crate::core::command_parser::ParsedCommand;
use crate::core::summary::last_pause;
use crate::errors::AppResult;
use crate::models::{Entry, EntryKind};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{info, success};
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

/// Toggle the pause: open one, or close the open one and report its length.
pub fn handle(parsed: &ParsedCommand, ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let lang = ctx.lang();
    let mut log = ctx.store.load(date)?;
    ensure_open(&log)?;

    let time = resolve_time(ctx, parsed.time_mode, &log)?;

    if !log.is_on_pause() {
        record(ctx, &mut log, Entry::new(EntryKind::Pause, time, parsed.log_type()))?;
        success(text(lang, Msg::PauseEnabled));
        return Ok(());
    }

    record(ctx, &mut log, Entry::new(EntryKind::Resume, time, parsed.log_type()))?;
    success(text(lang, Msg::PauseDisabled));

    if let Some(span) = last_pause(&log) {
        info(format!(
            "{} {} ({} - {})",
            text(lang, Msg::PauseDuration),
            format_minutes(span.minutes),
            span.start.format("%H:%M"),
            span.end.format("%H:%M"),
        ));
    }
    Ok(())
}
