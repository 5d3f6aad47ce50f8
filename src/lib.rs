//! # parcel-tracker
//!
//! Parcel journey tracking bar. This library re-exports the workspace core
//! and hosts the CLI.

pub use tracker_core;

pub mod cli;
pub mod commands;
