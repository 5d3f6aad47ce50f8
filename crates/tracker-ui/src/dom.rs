//! DOM surface and plain-page bootstrap
//!
//! Provides panic-free container lookup and a [`Surface`] that writes the
//! tracker tree into a DOM element. All JS interop operations return Results.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use tracker_core::{
    Checkpoint, Error, Node, Surface, Tracker, TrackerConfig, bootstrap, parse_journey,
    sample_journey, tree::nodes_to_html,
};

use crate::error::Result;

/// Surface backed by a DOM element; each render replaces its children
#[derive(Debug, Clone)]
pub struct DomSurface {
    element: Element,
}

impl DomSurface {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self { element }
    }

    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }
}

impl Surface for DomSurface {
    fn replace_content(&mut self, content: Vec<Node>) -> tracker_core::Result<()> {
        if !self.element.is_connected() {
            return Err(Error::mount_failed("tracker container is not attached"));
        }
        self.element.set_inner_html(&nodes_to_html(&content));
        Ok(())
    }
}

/// Find the tracker container in the current document
///
/// # Errors
///
/// Returns an error if:
/// - No window or document object is available (not in browser context)
/// - The selector is not valid CSS
/// - No element matches the selector
pub fn find_container(selector: &str) -> Result<Element> {
    let window =
        web_sys::window().ok_or_else(|| Error::mount_failed("No window object available"))?;
    let document = window
        .document()
        .ok_or_else(|| Error::mount_failed("No document object available"))?;

    let element = document
        .query_selector(selector)
        .map_err(|e| Error::mount_failed(format!("Invalid selector '{selector}': {e:?}")))?
        .ok_or_else(|| Error::mount_failed(format!("No element matches '{selector}'")))?;

    Ok(element)
}

/// Render `journey` into the element matching `config.container_selector`
///
/// # Errors
///
/// Returns an error if the container cannot be found, the journey has fewer
/// than two checkpoints, or the render cannot be written.
pub fn mount_tracker(
    journey: Vec<Checkpoint>,
    config: &TrackerConfig,
) -> Result<Tracker<DomSurface>> {
    let element = find_container(&config.container_selector)?;
    Ok(bootstrap(journey, config, DomSurface::new(element))?)
}

/// Render the sample journey into `.tracker`
///
/// # Errors
///
/// Returns the error message as a JS string if mounting fails.
#[wasm_bindgen(js_name = initTracker)]
pub fn init_tracker() -> std::result::Result<(), JsValue> {
    mount_tracker(sample_journey(), &TrackerConfig::default())?;
    Ok(())
}

/// Render a journey given as JSON into the element matching `selector`
///
/// # Errors
///
/// Returns the error message as a JS string if the JSON is invalid or
/// mounting fails.
#[wasm_bindgen(js_name = renderTracker)]
pub fn render_tracker(selector: &str, journey_json: &str) -> std::result::Result<(), JsValue> {
    let journey = parse_journey(journey_json).map_err(crate::error::UiError::from)?;
    let config = TrackerConfig {
        container_selector: selector.to_string(),
        ..TrackerConfig::default()
    };
    mount_tracker(journey, &config)?;
    Ok(())
}
