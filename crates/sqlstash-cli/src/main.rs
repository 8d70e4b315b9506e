//! SQLStash CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Cli;
use sqlstash_core::error::ErrorKind;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {e}");
        // Transport-style mapping of the error taxonomy onto exit codes.
        let code = match e.kind {
            ErrorKind::Validation => 2,
            ErrorKind::NotFound => 3,
            _ => 1,
        };
        std::process::exit(code);
    }
}
