//! Dialogs opened by a trigger button.

use markupui_core::{
    Block, Build, Element, Environment, HasAttributes, HasChildren, Keyword, Node, Size,
    configurable, html, parts::sanitize_token,
};

use crate::style;

/// Configuration for [`Modal`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ModalConfig {
    /// Element id; the title gets `{id}-title`. Rendered lowercased and
    /// reduced to `[a-z0-9_-]`, with `modal` standing in for an empty result.
    pub id: String,
    /// Dialog heading.
    pub title: String,
    /// Body contents.
    pub body: Vec<Node>,
    /// Footer buttons, in order.
    pub buttons: Vec<Node>,
    /// Dialog width; `None` uses the configured default size.
    pub size: Option<Size>,
    /// Renders the dialog visible.
    pub open: bool,
}

impl Block for ModalConfig {
    const NAME: &'static str = "modal";
}

impl ModalConfig {
    fn dom_id(&self) -> String {
        let id = sanitize_token(&self.id);
        if id.is_empty() { Self::NAME.into() } else { id }
    }
}

impl Build for ModalConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-modal", style::MODAL);
        env.enqueue_script("markupui-modal", style::MODAL_SCRIPT);
        let parts = Self::parts();
        let id = self.dom_id();
        let title_id = format!("{id}-title");
        let size = self.size.unwrap_or(env.config().default_size);

        let close = html::element("button")
            .attr("type", "button")
            .class(&parts.part("close"))
            .attr("data-modal-close", true)
            .aria("label", env.translate("Close"))
            .child(html::icon(&env.config().icon_set, "no-alt"));

        let header = html::div()
            .class(&parts.part("header"))
            .child(
                html::heading(2, env.translate(&self.title))
                    .class(&parts.part("title"))
                    .id(title_id.as_str()),
            )
            .child(close);

        let mut dialog = html::div()
            .class(&parts.part("dialog"))
            .child(header)
            .child(
                html::div()
                    .class(&parts.part("body"))
                    .with_children(self.body.iter().cloned()),
            );
        if !self.buttons.is_empty() {
            dialog.push_child(
                html::div()
                    .class(&parts.part("footer"))
                    .with_children(self.buttons.iter().cloned()),
            );
        }

        html::div()
            .class(Self::NAME)
            .class(&parts.variant(size.as_str()))
            .id(id)
            .attr("role", "dialog")
            .aria("modal", "true")
            .aria("labelledby", title_id)
            .attr("hidden", !self.open)
            .child(
                html::div()
                    .class(&parts.part("backdrop"))
                    .attr("data-modal-close", true),
            )
            .child(dialog)
            .into()
    }
}

configurable!(
    /// A dialog with a title, body, footer buttons and a close button.
    ///
    /// Pair it with [`modal_trigger`] to open it.
    Modal,
    ModalConfig
);

impl Modal {
    /// A hidden dialog with element id `id`.
    ///
    /// The id is normalized like a class token, so `"MyModal"` renders as
    /// `id="mymodal"`. [`modal_trigger`] applies the same normalization.
    pub fn new(env: &Environment, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::from_config(
            env,
            ModalConfig {
                id: id.into(),
                title: title.into(),
                ..ModalConfig::default()
            },
        )
    }

    /// Appends body content.
    pub fn body(mut self, content: impl Into<Node>) -> Self {
        self.config_mut().body.push(content.into());
        self
    }

    /// Appends a footer button.
    pub fn button(mut self, button: impl Into<Node>) -> Self {
        self.config_mut().buttons.push(button.into());
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: Size) -> Self {
        self.config_mut().size = Some(size);
        self
    }

    /// Sets the size from a keyword; unknown keywords use the default size.
    pub fn size_keyword(mut self, size: &str) -> Self {
        self.config_mut().size = Size::parse_lenient(size);
        self
    }

    /// Renders the dialog already open.
    pub fn open(mut self) -> Self {
        self.config_mut().open = true;
        self
    }
}

/// A button that opens the modal with element id `modal_id`.
#[must_use]
pub fn modal_trigger(modal_id: &str, label: &str) -> Element {
    let id = sanitize_token(modal_id);
    html::element("button")
        .attr("type", "button")
        .class("button")
        .attr("data-modal-open", id.as_str())
        .aria("controls", id)
        .aria("haspopup", "dialog")
        .text(label)
}

#[cfg(test)]
mod tests {
    use markupui_core::{AssetKind, Config, Render, host::Translator};

    use super::*;

    #[derive(Debug)]
    struct Shouting;

    impl Translator for Shouting {
        fn translate(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn dialog_structure_and_aria() {
        let env = Environment::new();
        let markup = Modal::new(&env, "confirm-delete", "Delete post?")
            .body(html::p("This cannot be undone."))
            .button(html::element("button").class("button").text("Delete"))
            .size(Size::Small)
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<div class="modal modal--small" id="confirm-delete" role="dialog" aria-modal="true" aria-labelledby="confirm-delete-title" hidden>"#,
                r#"<div class="modal-backdrop" data-modal-close></div>"#,
                r#"<div class="modal-dialog">"#,
                r#"<div class="modal-header"><h2 class="modal-title" id="confirm-delete-title">Delete post?</h2>"#,
                r#"<button type="button" class="modal-close" data-modal-close aria-label="Close"><span class="dashicons dashicons-no-alt" aria-hidden="true"></span></button></div>"#,
                r#"<div class="modal-body"><p>This cannot be undone.</p></div>"#,
                r#"<div class="modal-footer"><button class="button">Delete</button></div>"#,
                "</div></div>"
            )
        );
    }

    #[test]
    fn unknown_size_falls_back_to_configured_default() {
        let env = Environment::new();
        let markup = Modal::new(&env, "m", "T").size_keyword("gigantic").render();
        assert!(markup.starts_with(r#"<div class="modal modal--medium""#));

        let env = Environment::builder()
            .config(Config {
                default_size: Size::Large,
                ..Config::default()
            })
            .build();
        let markup = Modal::new(&env, "m", "T").size_keyword("gigantic").render();
        assert!(markup.starts_with(r#"<div class="modal modal--large""#));
    }

    #[test]
    fn open_modal_is_not_hidden_and_enqueues_script() {
        let env = Environment::new();
        let markup = Modal::new(&env, "m", "T").open().render();
        assert!(!markup.contains(" hidden"));
        assert!(env.assets().is_enqueued(AssetKind::Script, "markupui-modal"));
    }

    #[test]
    fn labels_go_through_the_translator() {
        let env = Environment::builder().translator(Shouting).build();
        let markup = Modal::new(&env, "m", "Delete post?").render();
        assert!(markup.contains(r#"<h2 class="modal-title" id="m-title">DELETE POST?</h2>"#));
        assert!(markup.contains(r#"data-modal-close aria-label="CLOSE">"#));
    }

    #[test]
    fn ids_are_normalized() {
        let env = Environment::new();
        let markup = Modal::new(&env, "MyModal", "T").render();
        assert!(markup.contains(r#"id="mymodal" role="dialog""#));
        assert!(markup.contains(r#"aria-labelledby="mymodal-title""#));
        assert!(Modal::new(&env, "  ", "T").render().contains(r#"id="modal""#));
    }

    #[test]
    fn trigger_targets_modal() {
        assert_eq!(
            modal_trigger("Confirm Delete", "Delete").render(),
            r#"<button type="button" class="button" data-modal-open="confirm-delete" aria-controls="confirm-delete" aria-haspopup="dialog">Delete</button>"#
        );
    }
}
