//! Leptos UI components for the tracking bar

pub mod tracker_bar;

pub use tracker_bar::{TRACKER_STYLES, TrackerBar};
