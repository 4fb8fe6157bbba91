//! Breadcrumb trails.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// A crumb: label and optional link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Visible label.
    pub label: String,
    /// Target; crumbs without one render as text.
    pub url: Option<String>,
}

impl Crumb {
    /// A linked crumb.
    #[must_use]
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
        }
    }

    /// A crumb without a link.
    #[must_use]
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }
}

/// Configuration for [`Breadcrumbs`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BreadcrumbsConfig {
    /// Crumbs after the home crumb.
    pub items: Vec<Crumb>,
    /// Leading crumb.
    pub home: Option<Crumb>,
    /// Text between crumbs.
    pub separator: String,
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            home: None,
            separator: "\u{203a}".into(),
        }
    }
}

impl Block for BreadcrumbsConfig {
    const NAME: &'static str = "breadcrumbs";
}

impl Build for BreadcrumbsConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-breadcrumbs", style::BREADCRUMBS);
        let parts = Self::parts();

        let crumbs: Vec<&Crumb> = self.home.iter().chain(&self.items).collect();
        let mut list = html::element("ol").class(&parts.part("list"));
        for (index, crumb) in crumbs.iter().enumerate() {
            let is_last = index + 1 == crumbs.len();
            if index > 0 {
                list.push_child(
                    html::element("li")
                        .class(&parts.part("separator"))
                        .attr("aria-hidden", "true")
                        .text(self.separator.as_str()),
                );
            }

            let label = env.translate(&crumb.label);
            let mut item = html::element("li").class(&parts.part("item"));
            match &crumb.url {
                Some(url) if !is_last => item.push_child(html::a(env.url(url), label)),
                _ => item.push_child(Node::text(label)),
            }
            if is_last {
                item.add_class(&parts.part_variant("item", "current"));
                item.set_attr("aria-current", "page");
            }
            list.push_child(item);
        }

        html::element("nav")
            .class(Self::NAME)
            .aria("label", env.translate("Breadcrumb"))
            .child(list)
            .into()
    }
}

configurable!(
    /// A breadcrumb trail. The last crumb is the current page and is never linked.
    Breadcrumbs,
    BreadcrumbsConfig
);

impl Breadcrumbs {
    /// An empty trail.
    pub fn new(env: &Environment) -> Self {
        Self::from_config(env, BreadcrumbsConfig::default())
    }

    /// Sets the leading home crumb.
    pub fn home(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.config_mut().home = Some(Crumb::link(label, url));
        self
    }

    /// Appends a linked crumb.
    pub fn link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.config_mut().items.push(Crumb::link(label, url));
        self
    }

    /// Appends an unlinked crumb.
    pub fn crumb(mut self, label: impl Into<String>) -> Self {
        self.config_mut().items.push(Crumb::text(label));
        self
    }

    /// Sets the separator text.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config_mut().separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn last_crumb_is_current_page() {
        let env = Environment::new();
        let markup = Breadcrumbs::new(&env)
            .home("Dashboard", "/wp-admin/")
            .link("Posts", "/wp-admin/edit.php")
            .link("Edit", "/ignored")
            .separator("/")
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<nav class="breadcrumbs" aria-label="Breadcrumb"><ol class="breadcrumbs-list">"#,
                r#"<li class="breadcrumbs-item"><a href="/wp-admin/">Dashboard</a></li>"#,
                r#"<li class="breadcrumbs-separator" aria-hidden="true">/</li>"#,
                r#"<li class="breadcrumbs-item"><a href="/wp-admin/edit.php">Posts</a></li>"#,
                r#"<li class="breadcrumbs-separator" aria-hidden="true">/</li>"#,
                r#"<li class="breadcrumbs-item breadcrumbs-item--current" aria-current="page">Edit</li>"#,
                "</ol></nav>"
            )
        );
    }

    #[test]
    fn script_urls_are_dropped() {
        let env = Environment::new();
        let markup = Breadcrumbs::new(&env)
            .link("Bad", "javascript:alert(1)")
            .crumb("Here")
            .render();
        assert!(markup.contains(r#"<a href="">Bad</a>"#));
    }
}
