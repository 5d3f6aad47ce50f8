//! Leptos 0.7 CSR front-end for the parcel tracking bar
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Rendering delegated to `tracker-core`; this crate supplies the DOM
//!   surface and the components around it
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `components`: Tracking bar component and stylesheet
//! - `dom`: DOM surface, container lookup and JS entry points
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod dom;
pub mod error;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
pub use dom::{DomSurface, find_container, mount_tracker};
