//! Render targets
//!
//! A surface is the container whose content a render replaces. The browser
//! front-end implements [`Surface`] over a DOM element; [`MemorySurface`]
//! keeps the tree in memory for tests and static HTML output.

use crate::classes;
use crate::result::Result;
use crate::tree::{Element, Node, nodes_to_html};

/// A container whose whole content is replaced on every render
pub trait Surface {
    /// Replace everything inside the container with `content`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MountFailed`] if the container cannot be written.
    fn replace_content(&mut self, content: Vec<Node>) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn replace_content(&mut self, content: Vec<Node>) -> Result<()> {
        (**self).replace_content(content)
    }
}

/// In-memory surface holding the most recent content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    content: Vec<Node>,
    renders: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of the container
    #[must_use]
    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Number of times the content has been replaced
    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }

    /// The container element with its current content
    #[must_use]
    pub fn container(&self) -> Element {
        self.content
            .iter()
            .cloned()
            .fold(Element::div().class(classes::TRACKER), |container, node| {
                container.child(node)
            })
    }

    /// HTML of the container's inner content
    #[must_use]
    pub fn inner_html(&self) -> String {
        nodes_to_html(&self.content)
    }
}

impl Surface for MemorySurface {
    fn replace_content(&mut self, content: Vec<Node>) -> Result<()> {
        self.content = content;
        self.renders = self.renders.saturating_add(1);
        Ok(())
    }
}
