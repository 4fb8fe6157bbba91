//! Status badges.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Keyword, Node, Size, configurable,
    html, parts::sanitize_token,
};

use crate::style;

/// Icon per status key.
pub const STATUS_ICONS: &[(&str, &str)] = &[
    ("publish", "yes-alt"),
    ("draft", "edit"),
    ("pending", "clock"),
    ("private", "lock"),
    ("future", "calendar-alt"),
    ("trash", "trash"),
    ("active", "yes"),
    ("inactive", "dismiss"),
    ("success", "yes-alt"),
    ("warning", "warning"),
    ("error", "dismiss"),
    ("info", "info"),
];

/// Icon for statuses missing from [`STATUS_ICONS`].
pub const DEFAULT_ICON: &str = "marker";

/// Looks up the icon for `status`, falling back to [`DEFAULT_ICON`].
#[must_use]
pub fn status_icon(status: &str) -> &'static str {
    let key = sanitize_token(status);
    STATUS_ICONS
        .iter()
        .find(|(known, _)| *known == key)
        .map_or_else(
            || {
                tracing::debug!(status, "no icon for badge status; using the default");
                DEFAULT_ICON
            },
            |(_, icon)| icon,
        )
}

/// Configuration for [`Badge`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct BadgeConfig {
    /// Visible text.
    pub label: String,
    /// Status key selecting icon and color.
    pub status: Option<String>,
    /// Size; `None` uses the configured default size.
    pub size: Option<Size>,
    /// Hides the icon.
    pub hide_icon: bool,
}

impl Block for BadgeConfig {
    const NAME: &'static str = "badge";
}

impl Build for BadgeConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-badge", style::BADGE);
        let parts = Self::parts();
        let size = self.size.unwrap_or(env.config().default_size);

        let mut badge = html::span().class(Self::NAME);
        let status = self.status.as_deref().filter(|status| !status.trim().is_empty());
        if let Some(status) = status {
            badge.add_class(&parts.variant(status));
        }
        badge.add_class(&parts.variant(size.as_str()));

        if !self.hide_icon {
            let icon = status.map_or(DEFAULT_ICON, status_icon);
            badge.push_child(html::icon(&env.config().icon_set, icon).class(&parts.part("icon")));
        }
        badge
            .child(
                html::span()
                    .class(&parts.part("label"))
                    .text(env.translate(&self.label)),
            )
            .into()
    }
}

configurable!(
    /// A small label with a status icon.
    Badge,
    BadgeConfig
);

impl Badge {
    /// A badge reading `label`.
    pub fn new(env: &Environment, label: impl Into<String>) -> Self {
        Self::from_config(
            env,
            BadgeConfig {
                label: label.into(),
                ..BadgeConfig::default()
            },
        )
    }

    /// Sets the status key.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.config_mut().status = Some(status.into());
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

    /// Hides the icon.
    pub fn without_icon(mut self) -> Self {
        self.config_mut().hide_icon = true;
        self
    }
}

/// Creates a badge reading `label` with `status`.
pub fn badge(env: &Environment, label: impl Into<String>, status: impl Into<String>) -> Badge {
    Badge::new(env, label).status(status)
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn known_status_uses_its_icon() {
        let env = Environment::new();
        assert_eq!(
            badge(&env, "Published", "publish").render(),
            concat!(
                r#"<span class="badge badge--publish badge--medium">"#,
                r#"<span class="dashicons dashicons-yes-alt badge-icon" aria-hidden="true"></span>"#,
                r#"<span class="badge-label">Published</span></span>"#
            )
        );
    }

    #[test]
    fn unknown_status_falls_back_to_default_icon() {
        let env = Environment::new();
        let markup = badge(&env, "Archived", "archived").render();
        assert!(markup.contains("dashicons-marker"));
        assert!(markup.contains("badge--archived"));
        assert_eq!(status_icon("Mystery"), DEFAULT_ICON);
    }

    #[test]
    fn size_keyword_fallback() {
        let env = Environment::new();
        let markup = Badge::new(&env, "x").size_keyword("enormous").without_icon().render();
        assert_eq!(
            markup,
            r#"<span class="badge badge--medium"><span class="badge-label">x</span></span>"#
        );
        let markup = Badge::new(&env, "x").size_keyword("LARGE").render();
        assert!(markup.starts_with(r#"<span class="badge badge--large">"#));
    }

    #[test]
    fn status_tokens_are_sanitized() {
        let env = Environment::new();
        let markup = badge(&env, "x", "In Review\" onclick=\"x").render();
        assert!(markup.starts_with(r#"<span class="badge badge--in-review-onclick-x badge--medium">"#));
    }
}
