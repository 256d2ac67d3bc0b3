use super::Context;
use crate::core::summary::summarize;
use crate::errors::AppResult;
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{header, warning};
use crate::utils::date::long_day;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::mins2readable;
use chrono::{NaiveDate, NaiveTime};

fn hhmm(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Facts about the day log: where it lives and what it adds up to.
pub fn handle(ctx: &mut Context, date: NaiveDate) -> AppResult<()> {
    let lang = ctx.lang();
    let log = ctx.store.load(date)?;
    let summary = summarize(&log);

    header(format!("{}: {}", text(lang, Msg::Date), long_day(date)));
    let rows = [
        (
            text(lang, Msg::File),
            ctx.store.path_for(date).display().to_string(),
        ),
        (text(lang, Msg::Entries), log.len().to_string()),
        (
            text(lang, Msg::StartWork),
            hhmm(summary.started),
        ),
        (text(lang, Msg::FinishWork), hhmm(summary.finished)),
        (
            text(lang, Msg::Worked),
            mins2readable(summary.worked_minutes, false),
        ),
        (
            text(lang, Msg::Paused),
            mins2readable(summary.paused_minutes, false),
        ),
    ];
    for (label, value) in rows {
        println!("{} {}", bold(&pad_right(label, 22)), value);
    }

    if summary.on_pause {
        warning(text(lang, Msg::OnPauseNow));
    }
    Ok(())
}
