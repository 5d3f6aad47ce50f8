//! CSS class names emitted by the renderer.
//!
//! These names are the styling contract with the tracker stylesheet. Renaming
//! or removing one is a breaking change and must bump
//! [`STYLE_CONTRACT_VERSION`].

/// Version of the class-name contract below
pub const STYLE_CONTRACT_VERSION: u32 = 1;

/// Container the renderer replaces (matched by the default selector)
pub const TRACKER: &str = "tracker";
/// List holding one footprint per checkpoint
pub const FOOTPRINTS: &str = "footprints";
pub const FOOTPRINT: &str = "footprint";
/// Track line drawn under the footprints
pub const TRACKER_BAR: &str = "tracker-bar";

// Icons
pub const ICON_NSC: &str = "icon-nsc";
pub const ICON_LOCAL_HUB: &str = "icon-local-hub";
pub const ICON_TRUCK: &str = "icon-truck";
pub const ICON_STORE: &str = "icon-store";
pub const ICON_FALLBACK: &str = "no-image";

// States
pub const STATE_SUCCESS: &str = "icon-green";
pub const STATE_NEUTRAL: &str = "icon-grey";

// Arrows
pub const ARROW: &str = "arrow";
pub const ARROW_SUCCESS: &str = "arrow-green";
pub const ARROW_NEUTRAL: &str = "arrow-grey";

// Error glyph overlaid on the icon
pub const ERROR_GLYPH: &str = "icon-error";
pub const ERROR_COLOR: &str = "icon-red";

// Labels
pub const LABEL: &str = "infograph-label";
pub const LAST_NODE_LABEL: &str = "infograph-last-node-label";
pub const LABEL_PART1: &str = "part1";
pub const LABEL_PART2: &str = "part2";
