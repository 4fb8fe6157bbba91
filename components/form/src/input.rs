//! Single form controls: inputs, textareas, checkboxes, labels and buttons.
//!
//! These are plain element factories; wrap them in a
//! [`Field`](crate::Field) for a labelled row.

use core::ops::RangeInclusive;

use markupui_core::{AttrValue, Element, HasAttributes, HasChildren, html};

markupui_core::keyword! {
    /// The `type` of a `<button>`.
    pub enum ButtonKind: "button" {
        /// A plain button that does nothing without script.
        Button => "button",
        /// Submits the enclosing form.
        Submit => "submit",
        /// Resets the enclosing form.
        Reset => "reset",
    } default Button
}

/// `<input type name>`
#[must_use]
pub fn input(kind: &str, name: &str) -> Element {
    html::element("input").attr("type", kind).attr("name", name)
}

/// `<input type="text">` with a value and the admin `regular-text` class.
#[must_use]
pub fn text_input(name: &str, value: &str) -> Element {
    input("text", name)
        .attr("value", value)
        .class("regular-text")
}

/// `<input type="email">`
#[must_use]
pub fn email_input(name: &str, value: &str) -> Element {
    input("email", name)
        .attr("value", value)
        .class("regular-text")
}

/// `<input type="number">` bounded by `range` and stepping by `step`.
#[must_use]
pub fn number_input(
    name: &str,
    value: Option<f64>,
    range: RangeInclusive<f64>,
    step: f64,
) -> Element {
    input("number", name)
        .attr("value", value)
        .attr("min", *range.start())
        .attr("max", *range.end())
        .attr("step", step)
        .class("small-text")
}

/// `<input type="hidden">`
#[must_use]
pub fn hidden(name: &str, value: impl Into<AttrValue>) -> Element {
    input("hidden", name).attr("value", value)
}

/// `<input type="password">`. Never pre-filled.
#[must_use]
pub fn password(name: &str) -> Element {
    input("password", name)
        .attr("autocomplete", "new-password")
        .class("regular-text")
}

/// `<textarea>` with escaped contents.
#[must_use]
pub fn textarea(name: &str, value: &str, rows: u32) -> Element {
    html::element("textarea")
        .attr("name", name)
        .attr("rows", rows)
        .class("large-text")
        .text(value)
}

/// `<input type="checkbox" value="1">`, checked when `checked` is set.
#[must_use]
pub fn checkbox(name: &str, checked: bool) -> Element {
    input("checkbox", name)
        .attr("value", "1")
        .attr("checked", checked)
}

/// `<label for>` with text.
#[must_use]
pub fn label(for_id: &str, text: &str) -> Element {
    html::element("label").attr("for", for_id).text(text)
}

/// `<button type class="button">` with a text label.
#[must_use]
pub fn button(kind: ButtonKind, text: &str) -> Element {
    html::element("button")
        .attr("type", kind.as_str())
        .class("button")
        .text(text)
}

/// The primary submit button.
#[must_use]
pub fn submit(text: &str) -> Element {
    button(ButtonKind::Submit, text).class("button-primary")
}
