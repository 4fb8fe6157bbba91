//! The admin search box.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
    parts::sanitize_token,
};

use crate::style;

/// Configuration for [`SearchBox`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SearchBoxConfig {
    /// Form target; empty searches the current page.
    pub action: String,
    /// Query parameter name.
    pub name: String,
    /// Current query.
    pub value: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Submit button label, also the visually hidden field label.
    pub submit_label: String,
    /// Query arguments to carry over as hidden fields, such as `page`.
    pub keep: Vec<(String, String)>,
}

impl Default for SearchBoxConfig {
    fn default() -> Self {
        Self {
            action: String::new(),
            name: "s".into(),
            value: String::new(),
            placeholder: None,
            submit_label: "Search".into(),
            keep: Vec::new(),
        }
    }
}

impl Block for SearchBoxConfig {
    const NAME: &'static str = "search-box";
}

impl Build for SearchBoxConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-search-box", style::SEARCH_BOX);
        let parts = Self::parts();
        let input_id = format!("{}-{}", Self::NAME, sanitize_token(&self.name));
        let label = env.translate(&self.submit_label);

        let mut form = html::element("form")
            .class(Self::NAME)
            .attr("role", "search")
            .attr("method", "get")
            .attr("action", env.url(&self.action));
        for (name, value) in &self.keep {
            form.push_child(
                html::element("input")
                    .attr("type", "hidden")
                    .attr("name", name.as_str())
                    .attr("value", value.as_str()),
            );
        }
        form.child(
            html::element("label")
                .class("screen-reader-text")
                .attr("for", input_id.as_str())
                .text(label.as_str()),
        )
        .child(
            html::element("input")
                .attr("type", "search")
                .class(&parts.part("input"))
                .id(input_id)
                .attr("name", self.name.as_str())
                .attr("value", self.value.as_str())
                .attr("placeholder", self.placeholder.as_deref().map(|text| env.translate(text))),
        )
        .child(
            html::element("button")
                .attr("type", "submit")
                .class("button")
                .text(label),
        )
        .into()
    }
}

configurable!(
    /// A GET search form.
    SearchBox,
    SearchBoxConfig
);

impl SearchBox {
    /// A search box submitting `s` to `action`.
    pub fn new(env: &Environment, action: impl Into<String>) -> Self {
        Self::from_config(
            env,
            SearchBoxConfig {
                action: action.into(),
                ..SearchBoxConfig::default()
            },
        )
    }

    /// Sets the query parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config_mut().name = name.into();
        self
    }

    /// Pre-fills the current query.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config_mut().value = value.into();
        self
    }

    /// Sets the placeholder.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config_mut().placeholder = Some(text.into());
        self
    }

    /// Sets the submit label.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.config_mut().submit_label = label.into();
        self
    }

    /// Carries a query argument over as a hidden field.
    pub fn keep(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_mut().keep.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn search_form() {
        let env = Environment::new();
        let markup = SearchBox::new(&env, "users.php")
            .value("ada \"l\"")
            .placeholder("Search users")
            .keep("page", "members")
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<form class="search-box" role="search" method="get" action="users.php">"#,
                r#"<input type="hidden" name="page" value="members">"#,
                r#"<label class="screen-reader-text" for="search-box-s">Search</label>"#,
                r#"<input type="search" class="search-box-input" id="search-box-s" name="s" value="ada &quot;l&quot;" placeholder="Search users">"#,
                r#"<button type="submit" class="button">Search</button>"#,
                "</form>"
            )
        );
    }

    #[test]
    fn placeholder_is_optional() {
        let env = Environment::new();
        assert!(!SearchBox::new(&env, "").render().contains("placeholder"));
    }
}
