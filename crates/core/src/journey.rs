//! Built-in sample journey
//!
//! Hand-authored data standing in for a shipment-tracking source: a parcel
//! that made it to the local hub, then hit a problem on the way to the store.

use crate::checkpoint::{Checkpoint, CheckpointName, VisualStatus};
use crate::config::TrackerConfig;
use crate::renderer::Tracker;
use crate::result::Result;
use crate::surface::Surface;

/// The sample journey used by the bootstrap
#[must_use]
pub fn sample_journey() -> Vec<Checkpoint> {
    vec![
        Checkpoint::new(
            CheckpointName::Nsc,
            "Received at National Hub",
            VisualStatus::Green,
        ),
        Checkpoint::new(
            CheckpointName::Truck,
            "Dispatched to Local Hub",
            VisualStatus::Green,
        ),
        Checkpoint::new(
            CheckpointName::LocalHub,
            "Received at Local Hub",
            VisualStatus::Green,
        ),
        Checkpoint::new(
            CheckpointName::Truck,
            "Dispatched to Store",
            VisualStatus::Error,
        ),
        Checkpoint::new(
            CheckpointName::Store,
            "Received at Store | Ready to Collect",
            VisualStatus::Grey,
        ),
    ]
}

/// Build a tracker for `journey` on `surface` and render it once.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] for journeys shorter than two
/// checkpoints, or the surface error if the render cannot be written.
pub fn bootstrap<S: Surface>(
    journey: Vec<Checkpoint>,
    config: &TrackerConfig,
    surface: S,
) -> Result<Tracker<S>> {
    let mut tracker = Tracker::with_config(journey, config, surface)?;
    tracker.render()?;
    tracing::info!(checkpoints = tracker.journey().len(), "tracker mounted");
    Ok(tracker)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_sample_journey_shape() {
        let journey = sample_journey();
        assert_eq!(journey.len(), 5);
        assert_eq!(journey[0].name(), &CheckpointName::Nsc);
        assert_eq!(journey[3].visual_status(), &VisualStatus::Error);
        assert_eq!(journey[4].name(), &CheckpointName::Store);
    }

    #[test]
    fn test_bootstrap_renders_once() {
        let tracker = bootstrap(
            sample_journey(),
            &TrackerConfig::default(),
            MemorySurface::new(),
        )
        .unwrap();
        assert_eq!(tracker.surface().renders(), 1);
        assert!(!tracker.surface().content().is_empty());
    }
}
