//! Presentation tree produced by the renderer
//!
//! A minimal element tree: just enough structure for the tracker markup
//! (tags, class lists, a left offset) plus HTML serialisation. Surfaces decide
//! how the tree reaches the screen.

use std::fmt;

/// Element tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
}

impl Tag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
        }
    }
}

/// A node in the presentation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.text_content(),
        }
    }

    /// Serialise to HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

/// Writes the node as HTML
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(&escape_html(text)),
            Self::Element(element) => fmt::Display::fmt(element, f),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with classes, an optional left offset and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    classes: Vec<String>,
    left_percent: Option<u32>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            left_percent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn div() -> Self {
        Self::new(Tag::Div)
    }

    #[must_use]
    pub const fn span() -> Self {
        Self::new(Tag::Span)
    }

    /// Add a class; empty names are ignored
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Position the element `percent` from the left edge of its container
    #[must_use]
    pub const fn left(mut self, percent: u32) -> Self {
        self.left_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub const fn left_percent(&self) -> Option<u32> {
        self.left_percent
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant elements (depth first, document order) carrying `class`
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.has_class(class) {
                found.push(child);
            }
            child.collect_by_class(class, found);
        }
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Inline style attribute value, if any
    #[must_use]
    pub fn style(&self) -> Option<String> {
        self.left_percent.map(|percent| format!("left: {percent}%"))
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

/// Writes the element and its subtree as HTML
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.as_str();
        write!(f, "<{tag}")?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape_html(&self.classes.join(" ")))?;
        }
        if let Some(style) = self.style() {
            write!(f, " style=\"{style}\"")?;
        }
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{tag}>")
    }
}

/// Serialise a sequence of sibling nodes
#[must_use]
pub fn nodes_to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}

/// Escape text for use in HTML content and double-quoted attributes
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_html() {
        assert_eq!(Element::div().to_html(), "<div></div>");
    }

    #[test]
    fn test_classes_and_style() {
        let element = Element::div().class("footprint").left(33);
        assert_eq!(
            element.to_html(),
            r#"<div class="footprint" style="left: 33%"></div>"#
        );
    }

    #[test]
    fn test_empty_class_is_ignored() {
        let element = Element::span().class("").class("arrow");
        assert_eq!(element.classes(), &["arrow".to_string()]);
    }

    #[test]
    fn test_text_is_escaped() {
        let element = Element::span().text("Fish & <Chips>");
        assert_eq!(element.to_html(), "<span>Fish &amp; &lt;Chips&gt;</span>");
        assert_eq!(element.text_content(), "Fish & <Chips>");
    }

    #[test]
    fn test_nested_html() {
        let element = Element::div()
            .class("outer")
            .child(Element::span().class("a").text("x"))
            .child(Element::span().class("b"));
        assert_eq!(
            element.to_html(),
            r#"<div class="outer"><span class="a">x</span><span class="b"></span></div>"#
        );
    }

    #[test]
    fn test_find_by_class_is_document_order() {
        let element = Element::div()
            .child(Element::span().class("label").text("first"))
            .child(
                Element::span()
                    .class("group")
                    .child(Element::span().class("label").text("second")),
            );
        let labels: Vec<String> = element
            .find_by_class("label")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(labels, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_display_matches_to_html() {
        let node = Node::from(
            Element::div()
                .class("footprint")
                .left(50)
                .child(Element::span().text("a & b")),
        );
        assert_eq!(format!("{node}"), node.to_html());
        assert_eq!(
            node.to_string(),
            r#"<div class="footprint" style="left: 50%"><span>a &amp; b</span></div>"#
        );
    }

    #[test]
    fn test_nodes_to_html() {
        let nodes = vec![Node::from(Element::div()), Node::text("a<b")];
        assert_eq!(nodes_to_html(&nodes), "<div></div>a&lt;b");
    }
}
