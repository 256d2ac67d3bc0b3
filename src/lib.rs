//! wwork library root.
//! Exposes the CLI definition, the high-level run() function and the
//! modules behind it (token parser, day log storage, editor).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use cli::commands::{self, Context};
use cli::parser::Cli;
use config::Config;
use errors::{AppError, AppResult};
use store::LogStore;
use ui::i18n::error_text;
use ui::messages::warning;
use ui::prompt::StdinPrompter;

/// Entry point used by main.rs
pub fn run(cli: Cli) -> AppResult<()> {
    // 1. configuration, loaded once
    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.to_string_lossy().to_string();
    }
    tracing::debug!(?cfg, "loaded configuration");

    // 2. clock
    let now = match &cli.at {
        Some(raw) => utils::date::parse_date_time(raw)
            .ok_or_else(|| AppError::InvalidTimeFormat(raw.clone()))?,
        None => utils::date::now(),
    };

    // 3. tokens → command, then dispatch
    let mut prompter = StdinPrompter;
    let mut ctx = Context {
        cfg: &cfg,
        store: LogStore::new(cfg.data_path()),
        now,
        prompter: &mut prompter,
    };

    let result = crate::core::command_parser::parse(&cli.tokens, &cfg)
        .and_then(|parsed| commands::execute(&parsed, &mut ctx));

    // Recoverable conditions are messages, not failures.
    match result {
        Err(e) if !e.is_fatal() => {
            warning(error_text(cfg.language, &e));
            Ok(())
        }
        other => other,
    }
}
