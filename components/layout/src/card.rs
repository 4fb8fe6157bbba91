//! Boxed content with a header, body and footer.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// Configuration for [`Card`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct CardConfig {
    /// Header text; no header is rendered when empty and there is no icon.
    pub title: String,
    /// Icon name from the configured icon set.
    pub icon: Option<String>,
    /// Body contents.
    pub body: Vec<Node>,
    /// Footer contents.
    pub footer: Option<Node>,
    /// Variant such as `warning`, rendered as `card--{variant}`.
    pub variant: Option<String>,
}

impl Block for CardConfig {
    const NAME: &'static str = "card";
}

impl Build for CardConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-card", style::CARD);
        let parts = Self::parts();

        let mut card = html::div().class(Self::NAME);
        if let Some(variant) = self.variant.as_deref().filter(|variant| !variant.is_empty()) {
            card.add_class(&parts.variant(variant));
        }

        if !self.title.is_empty() || self.icon.is_some() {
            let mut header = html::div().class(&parts.part("header"));
            if let Some(icon) = &self.icon {
                header.push_child(
                    html::icon(&env.config().icon_set, icon).class(&parts.part("icon")),
                );
            }
            if !self.title.is_empty() {
                header.push_child(
                    html::heading(2, env.translate(&self.title)).class(&parts.part("title")),
                );
            }
            card.push_child(header);
        }

        card.push_child(
            html::div()
                .class(&parts.part("body"))
                .with_children(self.body.iter().cloned()),
        );
        if let Some(footer) = &self.footer {
            card.push_child(html::div().class(&parts.part("footer")).child(footer.clone()));
        }
        card.into()
    }
}

configurable!(
    /// A card with an optional icon, title and footer.
    Card,
    CardConfig
);

impl Card {
    /// A card titled `title`.
    pub fn new(env: &Environment, title: impl Into<String>) -> Self {
        Self::from_config(
            env,
            CardConfig {
                title: title.into(),
                ..CardConfig::default()
            },
        )
    }

    /// Sets the header icon.
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.config_mut().icon = Some(name.into());
        self
    }

    /// Appends body content.
    pub fn body(mut self, content: impl Into<Node>) -> Self {
        self.config_mut().body.push(content.into());
        self
    }

    /// Sets the footer.
    pub fn footer(mut self, content: impl Into<Node>) -> Self {
        self.config_mut().footer = Some(content.into());
        self
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.config_mut().variant = Some(variant.into());
        self
    }
}

/// Creates a card titled `title` around `body`.
pub fn card(env: &Environment, title: impl Into<String>, body: impl Into<Node>) -> Card {
    Card::new(env, title).body(body)
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn full_card() {
        let env = Environment::new();
        let markup = card(&env, "At a Glance", html::p("3 posts"))
            .icon("dashboard")
            .footer(html::a("/wp-admin/edit.php", "All posts"))
            .variant("Success")
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<div class="card card--success">"#,
                r#"<div class="card-header"><span class="dashicons dashicons-dashboard card-icon" aria-hidden="true"></span><h2 class="card-title">At a Glance</h2></div>"#,
                r#"<div class="card-body"><p>3 posts</p></div>"#,
                r#"<div class="card-footer"><a href="/wp-admin/edit.php">All posts</a></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn untitled_card_has_no_header() {
        let env = Environment::new();
        assert_eq!(
            Card::new(&env, "").body("plain").render(),
            r#"<div class="card"><div class="card-body">plain</div></div>"#
        );
    }
}
