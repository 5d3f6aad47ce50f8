//! Checkpoint renderer
//!
//! Turns a journey into footprints laid out along the track and writes them
//! into a [`Surface`]. Every render rebuilds the whole tree; there is no
//! incremental update.

use crate::checkpoint::Checkpoint;
use crate::classes;
use crate::config::{TerminalLabel, TrackerConfig};
use crate::layout::Track;
use crate::resolve::{Resolution, resolve};
use crate::result::{Result, ResultExt};
use crate::surface::Surface;
use crate::tree::{Element, Node};

/// Tracking bar widget bound to a surface
#[derive(Debug)]
pub struct Tracker<S: Surface> {
    journey: Vec<Checkpoint>,
    track: Track,
    terminal_label: TerminalLabel,
    surface: S,
}

impl<S: Surface> Tracker<S> {
    /// Create a tracker with the default terminal label.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the journey has fewer than two
    /// checkpoints.
    pub fn new(journey: Vec<Checkpoint>, surface: S) -> Result<Self> {
        Self::with_config(journey, &TrackerConfig::default(), surface)
    }

    /// Create a tracker using the labels from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the journey has fewer than two
    /// checkpoints.
    pub fn with_config(
        journey: Vec<Checkpoint>,
        config: &TrackerConfig,
        surface: S,
    ) -> Result<Self> {
        let track = Track::new(journey.len())?;
        Ok(Self {
            journey,
            track,
            terminal_label: config.terminal_label.clone(),
            surface,
        })
    }

    #[must_use]
    pub fn journey(&self) -> &[Checkpoint] {
        &self.journey
    }

    #[must_use]
    pub const fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Rebuild the footprints and replace the surface content with them.
    ///
    /// # Errors
    ///
    /// Propagates the surface error if its content cannot be replaced.
    pub fn render(&mut self) -> Result<()> {
        tracing::debug!(
            checkpoints = self.track.count(),
            increment = self.track.increment(),
            "rendering tracker"
        );
        if self.track.drift() > 0 {
            tracing::warn!(
                last_offset = self.track.last_offset(),
                "last checkpoint falls short of the track end"
            );
        }

        let content = build_content(&self.journey, &self.track, &self.terminal_label);
        self.surface
            .replace_content(content)
            .inspect_error(|e| tracing::error!("tracker render failed: {}", e))
    }
}

/// Build the container content for a journey: the footprints list followed by
/// the track bar.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the journey has fewer than two
/// checkpoints.
pub fn render_content(
    journey: &[Checkpoint],
    terminal_label: &TerminalLabel,
) -> Result<Vec<Node>> {
    let track = Track::new(journey.len())?;
    Ok(build_content(journey, &track, terminal_label))
}

// `track` must be laid out for exactly `journey.len()` checkpoints
fn build_content(
    journey: &[Checkpoint],
    track: &Track,
    terminal_label: &TerminalLabel,
) -> Vec<Node> {
    let footprints = journey
        .iter()
        .enumerate()
        .map(|(index, checkpoint)| footprint(checkpoint, index, track, terminal_label))
        .fold(Element::div().class(classes::FOOTPRINTS), |list, item| {
            list.child(item)
        });

    vec![
        Node::from(footprints),
        Node::from(Element::div().class(classes::TRACKER_BAR)),
    ]
}

fn footprint(
    checkpoint: &Checkpoint,
    index: usize,
    track: &Track,
    terminal_label: &TerminalLabel,
) -> Element {
    let resolution = resolve(checkpoint);
    let item = Element::div()
        .class(classes::FOOTPRINT)
        .left(track.offset(index))
        .child(icon(&resolution));

    if track.is_last(index) {
        item.child(last_node_label(terminal_label))
    } else {
        item.child(
            Element::span()
                .class(classes::LABEL)
                .text(checkpoint.description()),
        )
        .child(
            Element::span()
                .class(classes::ARROW)
                .class(resolution.arrow_class()),
        )
    }
}

fn icon(resolution: &Resolution) -> Element {
    let icon = Element::span()
        .class(resolution.icon_class())
        .class(resolution.state_class());

    if resolution.error {
        icon.child(
            Element::span()
                .class(classes::ERROR_GLYPH)
                .class(classes::ERROR_COLOR),
        )
    } else {
        icon
    }
}

// The last checkpoint's own description is not shown
fn last_node_label(label: &TerminalLabel) -> Element {
    Element::span()
        .class(classes::LAST_NODE_LABEL)
        .child(
            Element::span()
                .class(classes::LABEL)
                .class(classes::LABEL_PART1)
                .text(label.received.as_str()),
        )
        .child(
            Element::span()
                .class(classes::LABEL)
                .class(classes::LABEL_PART2)
                .text(label.ready.as_str()),
        )
}
