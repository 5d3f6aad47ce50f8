//! CLI command handlers.
//!
//! All commands follow functional patterns:
//! - Zero unwraps, zero panics
//! - Result<T, Error> for all operations

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use tracker_core::{
    Checkpoint, Error, MemorySurface, Track, TrackerConfig, bootstrap, journey_to_json,
    parse_journey, sample_journey,
};

use crate::cli::Commands;

/// Execute a CLI command, writing its primary output to `out`.
///
/// # Errors
///
/// Returns an error if input files cannot be read or parsed, the journey is
/// invalid, or output cannot be written.
pub fn execute_command(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Render {
            input,
            config,
            output,
        } => cmd_render(input.as_deref(), config.as_deref(), output, out),

        Commands::Sample => cmd_sample(out),

        Commands::Layout { count } => cmd_layout(count, out),
    }
}

/// Render a journey and emit the tracker HTML.
fn cmd_render(
    input: Option<&Path>,
    config: Option<&Path>,
    output: Option<PathBuf>,
    out: &mut impl Write,
) -> Result<()> {
    let journey = load_journey(input)?;
    let config = match config {
        Some(path) => TrackerConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => TrackerConfig::default(),
    };

    let tracker = bootstrap(journey, &config, MemorySurface::new())
        .context("Failed to render journey")?;
    let html = tracker.surface().container().to_html();

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{html}\n"))
                .map_err(|e| Error::file_write_failed(&path, e.to_string()))?;
            info!("Wrote tracker HTML to {}", path.display());
        }
        None => writeln!(out, "{html}")?,
    }
    Ok(())
}

/// Print the sample journey.
fn cmd_sample(out: &mut impl Write) -> Result<()> {
    let json = journey_to_json(&sample_journey())?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Print one offset per line for `count` checkpoints.
fn cmd_layout(count: usize, out: &mut impl Write) -> Result<()> {
    let track = Track::new(count)?;
    info!(
        increment = track.increment(),
        drift = track.drift(),
        "Computed track layout"
    );
    for offset in track.offsets() {
        writeln!(out, "{offset}")?;
    }
    Ok(())
}

fn load_journey(input: Option<&Path>) -> Result<Vec<Checkpoint>> {
    let Some(path) = input else {
        info!("No input given, using sample journey");
        return Ok(sample_journey());
    };

    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
    let journey = parse_journey(&text)
        .with_context(|| format!("Invalid journey in '{}'", path.display()))?;
    info!("Loaded {} checkpoints from {}", journey.len(), path.display());
    Ok(journey)
}
