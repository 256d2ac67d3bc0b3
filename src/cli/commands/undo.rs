use super::Context;
use crate::errors::{AppError, AppResult};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::info;
use crate::ui::render::{entry_row, task_width};
use chrono::NaiveDate;

/// Remove the most recent entry; the START entry is only removed via edit.
pub fn handle(ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let mut log = ctx.store.load(date)?;

    match log.last() {
        Some(last) if last.kind.is_undoable() => {}
        _ => return Err(AppError::NothingToUndo),
    }

    let width = task_width(&log);
    let Some(removed) = log.pop() else {
        return Err(AppError::NothingToUndo);
    };
    ctx.store.save(&log)?;

    info(text(ctx.lang(), Msg::Removed));
    println!("{}", entry_row(&removed, width, ctx.lang()));
    Ok(())
}
