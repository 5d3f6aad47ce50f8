//! Tracking bar component
//!
//! Owns a `.tracker` container and renders the journey into it once the
//! element is mounted. Rendering goes through the core tracker so the markup
//! matches the plain-page bootstrap exactly.

use leptos::html::Div;
use leptos::prelude::*;

use tracker_core::{Checkpoint, TrackerConfig, bootstrap, classes};

use crate::dom::DomSurface;

/// Stylesheet for the tracker class contract
pub const TRACKER_STYLES: &str = r#"
.tracker {
    position: relative;
    height: 6rem;
    margin: 2rem 3rem;
}

.tracker-bar {
    position: absolute;
    top: 1.25rem;
    left: 0;
    right: 0;
    height: 4px;
    background: #d1d5db;
    z-index: 0;
}

.footprints {
    position: absolute;
    inset: 0;
    z-index: 1;
}

.footprint {
    position: absolute;
    top: 0;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    width: 8rem;
    text-align: center;
}

.footprint > span:first-child {
    position: relative;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    background-size: 60%;
    background-repeat: no-repeat;
    background-position: center;
}

.icon-green { background-color: #22c55e; }
.icon-grey { background-color: #9ca3af; }

.icon-error {
    position: absolute;
    right: -0.25rem;
    top: -0.25rem;
    width: 1rem;
    height: 1rem;
    border-radius: 50%;
}

.icon-error::after {
    content: "!";
    color: white;
    font-weight: bold;
    font-size: 0.75rem;
}

.icon-red { background-color: #ef4444; }

.infograph-label {
    font-size: 0.75rem;
    margin-top: 0.5rem;
    color: #374151;
}

.infograph-last-node-label {
    display: flex;
    flex-direction: column;
}

.infograph-label.part2 {
    margin-top: 0;
    font-weight: 600;
}

.arrow {
    position: absolute;
    top: 1rem;
    right: -1rem;
    width: 0;
    height: 0;
    border-top: 6px solid transparent;
    border-bottom: 6px solid transparent;
}

.arrow-green { border-left: 8px solid #22c55e; }
.arrow-grey { border-left: 8px solid #9ca3af; }
"#;

/// Tracking bar for a journey
#[component]
pub fn TrackerBar(
    journey: Vec<Checkpoint>,
    #[prop(optional)] config: Option<TrackerConfig>,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let config = config.unwrap_or_default();
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };

        match bootstrap(journey.clone(), &config, DomSurface::new(element.into())) {
            Ok(tracker) => {
                web_sys::console::log_1(
                    &format!("Tracker rendered {} checkpoints", tracker.journey().len()).into(),
                );
                set_error.set(None);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Tracker render failed: {}", e).into());
                set_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="tracker-panel">
            <div class=classes::TRACKER node_ref=container></div>
            {move || error.get().map(|e| view! {
                <div class="tracker-error">
                    <span class="error-icon">"!"</span>
                    <span class="error-message">{e}</span>
                </div>
            })}
            <style>{TRACKER_STYLES}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::{CheckpointName, VisualStatus, resolve};

    #[test]
    fn test_styles_cover_class_contract() {
        let contract = [
            classes::TRACKER,
            classes::TRACKER_BAR,
            classes::FOOTPRINTS,
            classes::FOOTPRINT,
            classes::STATE_SUCCESS,
            classes::STATE_NEUTRAL,
            classes::ARROW,
            classes::ARROW_SUCCESS,
            classes::ARROW_NEUTRAL,
            classes::ERROR_GLYPH,
            classes::ERROR_COLOR,
            classes::LABEL,
            classes::LAST_NODE_LABEL,
        ];
        for class in contract {
            assert!(
                TRACKER_STYLES.contains(&format!(".{class}")),
                "missing style for .{class}"
            );
        }
    }

    #[test]
    fn test_styles_cover_every_resolved_tone() {
        for status in ["green", "grey", "error", "in-transit"] {
            let checkpoint = Checkpoint::new(
                CheckpointName::Truck,
                "Dispatched",
                VisualStatus::parse(status),
            );
            let resolution = resolve(&checkpoint);
            for class in [resolution.state_class(), resolution.arrow_class()] {
                assert!(
                    TRACKER_STYLES.contains(&format!(".{class}")),
                    "missing style for .{class} ({status})"
                );
            }
        }
    }
}
