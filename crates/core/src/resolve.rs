//! Per-checkpoint style resolution
//!
//! Pure function of a single checkpoint: the same checkpoint always resolves
//! to the same classes, and nothing carries over between checkpoints.

use crate::checkpoint::{Checkpoint, CheckpointName, VisualStatus};
use crate::classes;

/// Icon shown for a checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Nsc,
    LocalHub,
    Truck,
    Store,
    /// Generic "no-image" icon for unrecognised names
    Fallback,
}

impl Icon {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Nsc => classes::ICON_NSC,
            Self::LocalHub => classes::ICON_LOCAL_HUB,
            Self::Truck => classes::ICON_TRUCK,
            Self::Store => classes::ICON_STORE,
            Self::Fallback => classes::ICON_FALLBACK,
        }
    }
}

/// Colour state of an icon and of the arrow leaving it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Neutral,
}

impl Tone {
    #[must_use]
    pub const fn state_class(self) -> &'static str {
        match self {
            Self::Success => classes::STATE_SUCCESS,
            Self::Neutral => classes::STATE_NEUTRAL,
        }
    }

    #[must_use]
    pub const fn arrow_class(self) -> &'static str {
        match self {
            Self::Success => classes::ARROW_SUCCESS,
            Self::Neutral => classes::ARROW_NEUTRAL,
        }
    }
}

/// Resolved styling for one checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub icon: Icon,
    pub tone: Tone,
    /// Overlay the error glyph on the icon
    pub error: bool,
}

impl Resolution {
    #[must_use]
    pub const fn icon_class(&self) -> &'static str {
        self.icon.css_class()
    }

    #[must_use]
    pub const fn state_class(&self) -> &'static str {
        self.tone.state_class()
    }

    #[must_use]
    pub const fn arrow_class(&self) -> &'static str {
        self.tone.arrow_class()
    }
}

/// Map a checkpoint name to its icon. Unknown names fall back to [`Icon::Fallback`].
#[must_use]
pub const fn icon_for(name: &CheckpointName) -> Icon {
    match name {
        CheckpointName::Nsc => Icon::Nsc,
        CheckpointName::LocalHub => Icon::LocalHub,
        CheckpointName::Truck => Icon::Truck,
        CheckpointName::Store => Icon::Store,
        CheckpointName::Unknown(_) => Icon::Fallback,
    }
}

/// Map a visual status to tone and error flag.
///
/// - green: success, no error
/// - grey: neutral, no error
/// - anything else (including `error`): neutral with the error glyph
#[must_use]
pub const fn tone_for(status: &VisualStatus) -> (Tone, bool) {
    match status {
        VisualStatus::Green => (Tone::Success, false),
        VisualStatus::Grey => (Tone::Neutral, false),
        VisualStatus::Error | VisualStatus::Unrecognized(_) => (Tone::Neutral, true),
    }
}

/// Resolve the styling for a checkpoint
#[must_use]
pub fn resolve(checkpoint: &Checkpoint) -> Resolution {
    if let CheckpointName::Unknown(raw) = checkpoint.name() {
        tracing::debug!(name = %raw, "unrecognised checkpoint name, using fallback icon");
    }
    if let VisualStatus::Unrecognized(raw) = checkpoint.visual_status() {
        tracing::debug!(status = %raw, "unrecognised visual status, treating as error");
    }

    let (tone, error) = tone_for(checkpoint.visual_status());
    Resolution {
        icon: icon_for(checkpoint.name()),
        tone,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(name: &str, status: &str) -> Checkpoint {
        Checkpoint::new(
            CheckpointName::parse(name),
            "description",
            VisualStatus::parse(status),
        )
    }

    #[test]
    fn test_green_is_success_without_error() {
        let resolution = resolve(&checkpoint("nsc", "green"));
        assert_eq!(resolution.state_class(), "icon-green");
        assert_eq!(resolution.arrow_class(), "arrow-green");
        assert!(!resolution.error);
    }

    #[test]
    fn test_grey_is_neutral_without_error() {
        let resolution = resolve(&checkpoint("store", "grey"));
        assert_eq!(resolution.state_class(), "icon-grey");
        assert_eq!(resolution.arrow_class(), "arrow-grey");
        assert!(!resolution.error);
    }

    #[test]
    fn test_error_is_neutral_with_error() {
        let resolution = resolve(&checkpoint("truck", "error"));
        assert_eq!(resolution.state_class(), "icon-grey");
        assert_eq!(resolution.arrow_class(), "arrow-grey");
        assert!(resolution.error);
    }

    #[test]
    fn test_unrecognised_status_is_treated_as_error() {
        let resolution = resolve(&checkpoint("truck", "amber"));
        assert_eq!(resolution.tone, Tone::Neutral);
        assert!(resolution.error);
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(resolve(&checkpoint("nsc", "grey")).icon_class(), "icon-nsc");
        assert_eq!(
            resolve(&checkpoint("local-hub", "grey")).icon_class(),
            "icon-local-hub"
        );
        assert_eq!(resolve(&checkpoint("truck", "grey")).icon_class(), "icon-truck");
        assert_eq!(resolve(&checkpoint("store", "grey")).icon_class(), "icon-store");
    }

    #[test]
    fn test_unknown_name_falls_back_to_no_image() {
        let resolution = resolve(&checkpoint("drone", "green"));
        assert_eq!(resolution.icon, Icon::Fallback);
        assert_eq!(resolution.icon_class(), "no-image");
        // Name fallback does not affect status resolution
        assert!(!resolution.error);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let point = checkpoint("local-hub", "error");
        assert_eq!(resolve(&point), resolve(&point));
    }

    #[test]
    fn test_previous_checkpoint_does_not_leak() {
        let failed = resolve(&checkpoint("truck", "error"));
        let next = resolve(&checkpoint("store", "green"));
        assert!(failed.error);
        assert!(!next.error);
        assert_eq!(next.tone, Tone::Success);
    }
}
