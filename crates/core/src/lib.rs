//! Core of the parcel tracking bar.
//!
//! A journey is an ordered list of [`Checkpoint`]s. The [`Tracker`] resolves
//! each checkpoint to icon and colour classes, lays the footprints out along a
//! horizontal track, and replaces the content of a [`Surface`] with the
//! resulting presentation tree.
//!
//! ## Module Structure
//! - `checkpoint`: journey data model and JSON wire form
//! - `resolve`: pure per-checkpoint style resolution
//! - `layout`: track offsets
//! - `tree`: presentation tree and HTML serialisation
//! - `renderer`: the tracker widget
//! - `surface`: render targets
//! - `classes`: CSS class contract
//! - `config`: TOML configuration
//! - `journey`: sample data and bootstrap

#![forbid(unsafe_code)]

pub mod checkpoint;
pub mod classes;
pub mod config;
pub mod error;
pub mod journey;
pub mod layout;
pub mod renderer;
pub mod resolve;
pub mod result;
pub mod surface;
pub mod tree;

pub use checkpoint::{Checkpoint, CheckpointName, VisualStatus, journey_to_json, parse_journey};
pub use config::{TerminalLabel, TrackerConfig};
pub use error::Error;
pub use journey::{bootstrap, sample_journey};
pub use layout::Track;
pub use renderer::{Tracker, render_content};
pub use resolve::{Icon, Resolution, Tone, resolve};
pub use result::{Result, ResultExt};
pub use surface::{MemorySurface, Surface};
pub use tree::{Element, Node, Tag};
