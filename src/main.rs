mod cli;
mod error;
mod histogram;
mod model;
mod parser;
mod report;
mod stats;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Diagnostics go to stderr so stdout stays clean for --json.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("latency_histogram=info")),
        )
        .init();

    cli::run(args)
}
