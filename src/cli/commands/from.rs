use super::{Context, ensure_open, record, resolve_time};
use crate::core::command_parser::ParsedCommand;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::success;
use crate::utils::git::{as_sentence, last_commit_subject};
use chrono::NaiveDate;

/// Log the last commit subject of the current repository, optionally under
/// a task (`ww from 1234`).
pub fn handle(parsed: &ParsedCommand, ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let mut log = ctx.store.load(date)?;
    ensure_open(&log)?;
    if log.is_on_pause() {
        return Err(AppError::OnPause);
    }

    let message = as_sentence(&last_commit_subject()?);
    let time = resolve_time(ctx, parsed.time_mode, &log)?;
    let entry = Entry::log(time, parsed.log_type(), parsed.task.clone(), Some(message));
    record(ctx, &mut log, entry)?;

    success(text(ctx.lang(), Msg::CommitLogged));
    Ok(())
}
