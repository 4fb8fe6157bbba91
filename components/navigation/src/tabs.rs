//! Tabbed panels with the ARIA tab pattern.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
    parts::sanitize_token,
};

use crate::style;

/// One tab and its panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Stable key, used in element ids after the same normalization as
    /// class tokens. A key that repeats an earlier one gets its position
    /// appended so ids stay unique.
    pub key: String,
    /// Tab label.
    pub label: String,
    /// Panel contents.
    pub content: Node,
}

/// Configuration for [`Tabs`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct TabsConfig {
    /// Prefix for the tab and panel ids.
    pub name: String,
    /// Tabs, in order.
    pub tabs: Vec<Tab>,
    /// Key of the selected tab. Unknown keys select the first tab.
    pub active: Option<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            name: "tabs".into(),
            tabs: Vec::new(),
            active: None,
        }
    }
}

impl Block for TabsConfig {
    const NAME: &'static str = "tabs";
}

impl TabsConfig {
    /// Index of the selected tab.
    fn active_index(&self) -> usize {
        let Some(active) = &self.active else {
            return 0;
        };
        self.tabs
            .iter()
            .position(|tab| tab.key == *active)
            .unwrap_or_else(|| {
                tracing::debug!(active = %active, "unknown active tab; selecting the first");
                0
            })
    }
}

impl Build for TabsConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-tabs", style::TABS);
        env.enqueue_script("markupui-tabs", style::TABS_SCRIPT);
        let parts = Self::parts();
        let prefix = sanitize_token(&self.name);
        let active = self.active_index();

        let mut list = html::div()
            .class(&parts.part("list"))
            .class("nav-tab-wrapper")
            .attr("role", "tablist");
        let mut panels = Vec::with_capacity(self.tabs.len());

        let mut keys: Vec<String> = Vec::with_capacity(self.tabs.len());
        for (index, tab) in self.tabs.iter().enumerate() {
            let base = sanitize_token(&tab.key);
            let mut key = base.clone();
            let mut suffix = index;
            while key.is_empty() || keys.contains(&key) {
                key = if base.is_empty() {
                    suffix.to_string()
                } else {
                    format!("{base}-{suffix}")
                };
                suffix += 1;
            }
            keys.push(key.clone());
            let tab_id = format!("{prefix}-tab-{key}");
            let panel_id = format!("{prefix}-panel-{key}");
            let selected = index == active;

            let mut button = html::element("button")
                .attr("type", "button")
                .class(&parts.part("tab"))
                .class("nav-tab")
                .attr("role", "tab")
                .id(tab_id.as_str())
                .aria("controls", panel_id.as_str())
                .aria("selected", if selected { "true" } else { "false" })
                .attr("tabindex", if selected { "0" } else { "-1" })
                .text(env.translate(&tab.label));
            if selected {
                button.add_class("nav-tab-active");
            }
            list.push_child(button);

            panels.push(
                html::div()
                    .class(&parts.part("panel"))
                    .attr("role", "tabpanel")
                    .id(panel_id)
                    .aria("labelledby", tab_id)
                    .attr("hidden", !selected)
                    .child(tab.content.clone()),
            );
        }

        html::div()
            .class(Self::NAME)
            .child(list)
            .with_children(panels)
            .into()
    }
}

configurable!(
    /// Tabs switching between panels.
    Tabs,
    TabsConfig
);

impl Tabs {
    /// An empty tab set; `name` prefixes the generated ids and is
    /// normalized like a class token (`"My Tabs"` becomes `my-tabs`).
    pub fn new(env: &Environment, name: impl Into<String>) -> Self {
        Self::from_config(
            env,
            TabsConfig {
                name: name.into(),
                ..TabsConfig::default()
            },
        )
    }

    /// Appends a tab.
    pub fn tab(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<Node>,
    ) -> Self {
        self.config_mut().tabs.push(Tab {
            key: key.into(),
            label: label.into(),
            content: content.into(),
        });
        self
    }

    /// Selects the tab with `key`.
    pub fn active(mut self, key: impl Into<String>) -> Self {
        self.config_mut().active = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    fn settings(env: &Environment) -> Tabs {
        Tabs::new(env, "settings")
            .tab("general", "General", html::p("g"))
            .tab("privacy", "Privacy", html::p("p"))
    }

    #[test]
    fn active_tab_is_selected() {
        let env = Environment::new();
        let markup = settings(&env).active("privacy").render();
        assert_eq!(
            markup,
            concat!(
                r#"<div class="tabs"><div class="tabs-list nav-tab-wrapper" role="tablist">"#,
                r#"<button type="button" class="tabs-tab nav-tab" role="tab" id="settings-tab-general" aria-controls="settings-panel-general" aria-selected="false" tabindex="-1">General</button>"#,
                r#"<button type="button" class="tabs-tab nav-tab nav-tab-active" role="tab" id="settings-tab-privacy" aria-controls="settings-panel-privacy" aria-selected="true" tabindex="0">Privacy</button>"#,
                "</div>",
                r#"<div class="tabs-panel" role="tabpanel" id="settings-panel-general" aria-labelledby="settings-tab-general" hidden><p>g</p></div>"#,
                r#"<div class="tabs-panel" role="tabpanel" id="settings-panel-privacy" aria-labelledby="settings-tab-privacy"><p>p</p></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn repeated_keys_get_distinct_ids() {
        let env = Environment::new();
        let markup = Tabs::new(&env, "Site Settings")
            .tab("General", "One", html::p("1"))
            .tab("general", "Two", html::p("2"))
            .tab("", "Three", html::p("3"))
            .render();
        assert!(markup.contains(r#"id="site-settings-tab-general""#));
        assert!(markup.contains(r#"id="site-settings-tab-general-1""#));
        assert!(markup.contains(r#"id="site-settings-tab-2""#));
        assert!(markup.contains(r#"id="site-settings-panel-general-1" aria-labelledby="site-settings-tab-general-1""#));
    }

    #[test]
    fn unknown_active_key_selects_first_tab() {
        let env = Environment::new();
        let fallback = settings(&env).active("missing").render();
        let default = settings(&env).render();
        assert_eq!(fallback, default);
        assert!(fallback.contains(r#"id="settings-tab-general" aria-controls="settings-panel-general" aria-selected="true""#));
    }
}
