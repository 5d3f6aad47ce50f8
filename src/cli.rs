//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parcel tracking bar renderer
#[derive(Parser, Debug)]
#[command(name = "parcel-tracker")]
#[command(version)]
#[command(about = "Render a parcel's journey as a tracking bar")]
#[command(
    long_about = "Lays out a parcel's checkpoints along a horizontal track and renders the tracking bar markup as an HTML fragment."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a journey to HTML
    Render {
        /// Journey JSON file (array of checkpoints); the sample journey is used if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Tracker config TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the sample journey as JSON
    Sample,

    /// Print the track offsets for a number of checkpoints
    Layout {
        /// Number of checkpoints
        #[arg(short = 'n', long)]
        count: usize,
    },
}
