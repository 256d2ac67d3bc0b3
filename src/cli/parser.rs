use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for wwork.
///
/// Flags are handled by clap; everything else is the terse token grammar
/// resolved by `core::command_parser`.
#[derive(Parser, Debug)]
#[command(
    name = "ww",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log your work day: start, log tasks, pause, finish, edit",
    long_about = None,
    after_help = "Run `ww help` for the token grammar."
)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(long = "config", env = "WWORK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory holding the day logs
    #[arg(long = "data-dir", env = "WWORK_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Pin the clock ("YYYY-MM-DD HH:MM"), for backfilling and tests
    #[arg(long = "at", hide = true, value_name = "DATETIME")]
    pub at: Option<String>,

    /// Command tokens, e.g. `start`, `1234 fixed bug +15`, `pause y`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
