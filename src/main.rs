//! wwork main entrypoint.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wwork::cli::parser::Cli;
use wwork::run;
use wwork::ui::messages::error;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(cli) {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
