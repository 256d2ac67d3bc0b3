use super::Context;
use crate::core::edit::{EditOutcome, EditSession};
use crate::errors::AppResult;
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{info, success};
use crate::ui::render::print_log;
use chrono::NaiveDate;

/// Interactive editor over the day's entries.
pub fn handle(ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let lang = ctx.lang();
    let mut log = ctx.store.load(date)?;

    let outcome = EditSession {
        store: &ctx.store,
        cfg: ctx.cfg,
        prompter: &mut *ctx.prompter,
    }
    .run(&mut log)?;
    tracing::debug!(?outcome, "edit finished");

    match outcome {
        EditOutcome::Saved => {
            print_log(&log, lang, false);
            success(text(lang, Msg::Saved));
        }
        EditOutcome::Declined => info(text(lang, Msg::Declined)),
        EditOutcome::Terminated => success(format!(
            "{} {}",
            text(lang, Msg::DayDeleted),
            ctx.store.path_for(date).display()
        )),
    }
    Ok(())
}
