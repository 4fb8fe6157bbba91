//! Serialization of node trees to HTML strings.

use alloc::string::String;

use crate::{
    attributes::HasAttributes,
    host::{Escaper, StandardEscaper},
    node::{Element, HasChildren, Node},
};

/// HTML void elements: rendered without a closing tag, never with children.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text content is never escaped.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Returns `true` for void element names, case-insensitively.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag))
}

/// Returns `true` for raw text element names, case-insensitively.
#[must_use]
pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|raw| raw.eq_ignore_ascii_case(tag))
}

/// Anything that serializes to HTML.
pub trait Render {
    /// Appends the markup for `self` to `out`, escaping text and attribute
    /// values through `escaper`.
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String);

    /// Appends the markup for `self` to `out` with the standard escaping.
    fn write_html(&self, out: &mut String) {
        self.write_html_with(&StandardEscaper, out);
    }

    /// Returns the markup for `self`.
    ///
    /// Rendering never mutates observable state, so calling this repeatedly
    /// yields the same string.
    fn render(&self) -> String {
        self.render_with(&StandardEscaper)
    }

    /// Returns the markup for `self`, escaped through `escaper`.
    fn render_with(&self, escaper: &dyn Escaper) -> String {
        let mut out = String::new();
        self.write_html_with(escaper, &mut out);
        out
    }
}

impl Render for Node {
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        write_node(self, escaper, out, true);
    }
}

impl Render for Element {
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        write_element(self, escaper, out);
    }
}

impl<T: Render> Render for [T] {
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        for item in self {
            item.write_html_with(escaper, out);
        }
    }
}

impl<T: Render> Render for alloc::vec::Vec<T> {
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        self.as_slice().write_html_with(escaper, out);
    }
}

impl<T: Render> Render for Option<T> {
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        if let Some(inner) = self {
            inner.write_html_with(escaper, out);
        }
    }
}

fn write_node(node: &Node, escaper: &dyn Escaper, out: &mut String, escape_text: bool) {
    match node {
        Node::Element(element) => write_element(element, escaper, out),
        Node::Text(text) if escape_text => escaper.push_html(out, text),
        Node::Text(text) | Node::Raw(text) => out.push_str(text),
        Node::Fragment(nodes) => {
            for child in nodes {
                write_node(child, escaper, out, escape_text);
            }
        }
    }
}

fn write_element(element: &Element, escaper: &dyn Escaper, out: &mut String) {
    let tag = element.tag();
    out.push('<');
    out.push_str(tag);
    element.attributes().write_html_with(escaper, out);
    out.push('>');

    if is_void_element(tag) {
        return;
    }

    let escape_text = element.escapes_text() && !is_raw_text_element(tag);
    for child in element.children() {
        write_node(child, escaper, out, escape_text);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
