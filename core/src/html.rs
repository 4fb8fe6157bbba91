//! Element factories.
//!
//! Thin constructors for the tags components reach for most. Each returns an
//! [`Element`] ready for the builder methods of
//! [`HasAttributes`](crate::HasAttributes) and [`HasChildren`].

use alloc::{format, string::String};

use crate::{
    attributes::HasAttributes,
    node::{Element, HasChildren, Node},
};

/// An element with an arbitrary tag name.
#[must_use]
pub fn element(tag: impl Into<String>) -> Element {
    Element::new(tag)
}

/// `<div>`
#[must_use]
pub fn div() -> Element {
    Element::new("div")
}

/// `<span>`
#[must_use]
pub fn span() -> Element {
    Element::new("span")
}

/// `<p>` with text.
#[must_use]
pub fn p(text: impl Into<String>) -> Element {
    Element::new("p").text(text)
}

/// `<a href>` with a text label. The URL is used as given; sanitize it
/// through the environment's escaper first when it comes from user input.
#[must_use]
pub fn a(href: impl Into<String>, label: impl Into<String>) -> Element {
    let href: String = href.into();
    Element::new("a").attr("href", href).text(label)
}

/// `<strong>` with text.
#[must_use]
pub fn strong(text: impl Into<String>) -> Element {
    Element::new("strong").text(text)
}

/// `<em>` with text.
#[must_use]
pub fn em(text: impl Into<String>) -> Element {
    Element::new("em").text(text)
}

/// `<code>` with text.
#[must_use]
pub fn code(text: impl Into<String>) -> Element {
    Element::new("code").text(text)
}

/// `<h1>`..`<h6>`; levels outside that range are clamped.
#[must_use]
pub fn heading(level: u8, text: impl Into<String>) -> Element {
    Element::new(format!("h{}", level.clamp(1, 6))).text(text)
}

/// `<img src alt>`
#[must_use]
pub fn img(src: &str, alt: &str) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

/// `<br>`
#[must_use]
pub fn br() -> Element {
    Element::new("br")
}

/// `<hr>`
#[must_use]
pub fn hr() -> Element {
    Element::new("hr")
}

/// `<ul>` with one `<li>` per item, in order.
#[must_use]
pub fn list<T: Into<Node>>(items: impl IntoIterator<Item = T>) -> Element {
    Element::new("ul").with_children(items.into_iter().map(list_item))
}

/// `<ol>` with one `<li>` per item, in order.
#[must_use]
pub fn ordered_list<T: Into<Node>>(items: impl IntoIterator<Item = T>) -> Element {
    Element::new("ol").with_children(items.into_iter().map(list_item))
}

fn list_item(item: impl Into<Node>) -> Element {
    Element::new("li").child(item)
}

/// An icon from an icon font: `<span class="{set} {set}-{name}" aria-hidden="true">`.
#[must_use]
pub fn icon(set: &str, name: &str) -> Element {
    span()
        .class(&format!("{set} {set}-{name}"))
        .attr("aria-hidden", "true")
}

/// A `dashicons` icon.
#[must_use]
pub fn dashicon(name: &str) -> Element {
    icon("dashicons", name)
}

/// A text node.
#[must_use]
pub fn text(text: impl Into<String>) -> Node {
    Node::text(text)
}

/// A raw markup node, emitted verbatim.
#[must_use]
pub fn raw(html: impl Into<String>) -> Node {
    Node::raw(html)
}

/// Siblings without a wrapper.
#[must_use]
pub fn fragment<T: Into<Node>>(nodes: impl IntoIterator<Item = T>) -> Node {
    Node::fragment(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Render;

    #[test]
    fn headings_are_clamped() {
        assert_eq!(heading(0, "a").render(), "<h1>a</h1>");
        assert_eq!(heading(9, "b").render(), "<h6>b</h6>");
    }

    #[test]
    fn icons_carry_set_and_name() {
        assert_eq!(
            dashicon("admin-users").render(),
            r#"<span class="dashicons dashicons-admin-users" aria-hidden="true"></span>"#
        );
    }

    #[test]
    fn links_escape_their_label() {
        assert_eq!(
            a("/wp-admin/?a=1&b=2", "<Edit>").render(),
            r#"<a href="/wp-admin/?a=1&amp;b=2">&lt;Edit&gt;</a>"#
        );
    }
}
