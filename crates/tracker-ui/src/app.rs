//! Main application component
//!
//! Bootstraps the tracking bar with the built-in sample journey.

use leptos::prelude::*;

use tracker_core::sample_journey;

use crate::components::TrackerBar;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let journey = sample_journey();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Parcel Tracker"</h1>
            </header>
            <main class="app-main">
                <TrackerBar journey=journey />
            </main>
        </div>
    }
}
