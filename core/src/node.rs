//! The node tree: [`Node`], [`Element`] and the [`HasChildren`] trait.

use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::attributes::{Attributes, HasAttributes};
use crate::render::is_void_element;

/// A single entry in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and children.
    Element(Element),
    /// Text, escaped on output unless its parent disables escaping.
    Text(String),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
    /// Siblings without a wrapping tag.
    Fragment(Vec<Node>),
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a raw markup node.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw(html.into())
    }

    /// Creates a fragment from anything convertible to nodes.
    #[must_use]
    pub fn fragment<T: Into<Self>>(nodes: impl IntoIterator<Item = T>) -> Self {
        Self::Fragment(nodes.into_iter().map(Into::into).collect())
    }

    /// A node that renders nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Returns `true` if this node renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Element(_) => false,
            Self::Text(text) | Self::Raw(text) => text.is_empty(),
            Self::Fragment(nodes) => nodes.iter().all(Self::is_empty),
        }
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the first element in document order: this node itself, or the
    /// first element found inside a fragment.
    pub fn root_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Fragment(nodes) => nodes.iter_mut().find_map(Self::root_element_mut),
            Self::Text(_) | Self::Raw(_) => None,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Node {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl<T: Into<Self>> From<Vec<T>> for Node {
    fn from(value: Vec<T>) -> Self {
        Self::fragment(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::empty, Into::into)
    }
}

/// Anything that owns an ordered child list.
pub trait HasChildren {
    /// Shared access to the children.
    fn children(&self) -> &[Node];

    /// Mutable access to the children.
    fn children_mut(&mut self) -> &mut Vec<Node>;

    /// Appends a child in place.
    fn push_child(&mut self, child: impl Into<Node>) {
        self.children_mut().push(child.into());
    }

    /// Appends a child, builder style.
    #[must_use]
    fn child(mut self, child: impl Into<Node>) -> Self
    where
        Self: Sized,
    {
        self.push_child(child);
        self
    }

    /// Appends several children, builder style.
    #[must_use]
    fn with_children<T: Into<Node>>(mut self, children: impl IntoIterator<Item = T>) -> Self
    where
        Self: Sized,
    {
        self.children_mut()
            .extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends an escaped text child.
    #[must_use]
    fn text(self, text: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.child(Node::Text(text.into()))
    }

    /// Appends a raw markup child.
    #[must_use]
    fn raw(self, html: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.child(Node::Raw(html.into()))
    }

    /// Removes every child.
    fn clear_children(&mut self) {
        self.children_mut().clear();
    }
}

/// A tag with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    children: Vec<Node>,
    escape_text: bool,
}

impl Element {
    /// Creates an empty element. Tag names are not validated.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            escape_text: true,
        }
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` if this is a void element (`br`, `input`, ...).
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }

    /// Whether text children are escaped on output.
    #[must_use]
    pub const fn escapes_text(&self) -> bool {
        self.escape_text
    }

    /// Sets whether text children are escaped on output.
    pub fn set_escape_text(&mut self, escape: bool) {
        self.escape_text = escape;
    }

    /// Emits text children verbatim, builder style.
    #[must_use]
    pub fn unescaped(mut self) -> Self {
        self.escape_text = false;
        self
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        fn collect(nodes: &[Node], out: &mut String) {
            for node in nodes {
                match node {
                    Node::Text(text) => out.push_str(text),
                    Node::Element(element) => collect(&element.children, out),
                    Node::Fragment(children) => collect(children, out),
                    Node::Raw(_) => {}
                }
            }
        }
        let mut out = String::new();
        collect(&self.children, &mut out);
        out
    }

    /// Converts into a [`Node`].
    #[must_use]
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl HasAttributes for Element {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl HasChildren for Element {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl core::fmt::Display for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use crate::render::Render;
        f.write_str(&self.render())
    }
}

impl core::fmt::Display for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use crate::render::Render;
        f.write_str(&self.render())
    }
}
