//! # parcel-tracker
//!
//! Command-line front-end for the tracking bar renderer.
//!
//! Logging goes to stderr so rendered HTML on stdout can be piped. Set
//! `RUST_LOG` to change the level (default `info`).

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use parcel_tracker::cli::Cli;
use parcel_tracker::commands::execute_command;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &mut out)
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
