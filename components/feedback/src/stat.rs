//! Dashboard statistics.

use markupui_core::{Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html};
use markupui_format::short_number;

use crate::style;

/// Configuration for [`Stat`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StatConfig {
    /// What is counted.
    pub label: String,
    /// The count.
    pub value: i64,
    /// Icon name from the configured icon set.
    pub icon: Option<String>,
    /// Makes the whole stat a link.
    pub url: Option<String>,
}

impl Block for StatConfig {
    const NAME: &'static str = "stat";
}

impl Build for StatConfig {
    #[allow(clippy::cast_precision_loss)]
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-stat", style::STAT);
        let parts = Self::parts();

        let mut stat = match &self.url {
            Some(url) => html::element("a").attr("href", env.url(url)),
            None => html::div(),
        }
        .class(Self::NAME);
        if let Some(icon) = &self.icon {
            stat.push_child(html::icon(&env.config().icon_set, icon).class(&parts.part("icon")));
        }
        stat.child(
            html::span()
                .class(&parts.part("value"))
                .attr("title", env.format_number(self.value as f64, 0))
                .text(short_number(self.value, env.config().precision)),
        )
        .child(
            html::span()
                .class(&parts.part("label"))
                .text(env.translate(&self.label)),
        )
        .into()
    }
}

configurable!(
    /// A large abbreviated number over a label.
    Stat,
    StatConfig
);

impl Stat {
    /// `value` counted as `label`.
    pub fn new(env: &Environment, label: impl Into<String>, value: i64) -> Self {
        Self::from_config(
            env,
            StatConfig {
                label: label.into(),
                value,
                ..StatConfig::default()
            },
        )
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.config_mut().icon = Some(icon.into());
        self
    }

    /// Links the stat.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config_mut().url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn abbreviates_with_exact_title() {
        let env = Environment::new();
        assert_eq!(
            Stat::new(&env, "Posts", 12_345).render(),
            concat!(
                r#"<div class="stat"><span class="stat-value" title="12,345">12.3K</span>"#,
                r#"<span class="stat-label">Posts</span></div>"#
            )
        );
    }

    #[test]
    fn linked_with_icon() {
        let env = Environment::new();
        let markup = Stat::new(&env, "Comments", 7)
            .icon("admin-comments")
            .url("edit-comments.php")
            .render();
        assert!(markup.starts_with(r#"<a href="edit-comments.php" class="stat"><span class="dashicons dashicons-admin-comments stat-icon""#));
        assert!(markup.contains(">7</span>"));
    }
}
