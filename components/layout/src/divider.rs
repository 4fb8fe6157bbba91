//! Horizontal separators.

use markupui_core::{Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html};

use crate::style;

/// Configuration for [`Divider`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct DividerConfig {
    /// Text centered on the line.
    pub label: Option<String>,
}

impl Block for DividerConfig {
    const NAME: &'static str = "divider";
}

impl Build for DividerConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-divider", style::DIVIDER);
        let parts = Self::parts();
        match self.label.as_deref().filter(|label| !label.is_empty()) {
            None => html::hr().class(Self::NAME).into(),
            Some(label) => html::div()
                .class(Self::NAME)
                .class(&parts.variant("labelled"))
                .attr("role", "separator")
                .child(html::span().class(&parts.part("label")).text(env.translate(label)))
                .into(),
        }
    }
}

configurable!(
    /// A separator line, optionally labelled.
    Divider,
    DividerConfig
);

impl Divider {
    /// A plain divider.
    pub fn new(env: &Environment) -> Self {
        Self::from_config(env, DividerConfig::default())
    }

    /// Centers `label` on the line.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config_mut().label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn plain_and_labelled() {
        let env = Environment::new();
        assert_eq!(Divider::new(&env).render(), r#"<hr class="divider">"#);
        assert_eq!(
            Divider::new(&env).label("or").render(),
            r#"<div class="divider divider--labelled" role="separator"><span class="divider-label">or</span></div>"#
        );
    }
}
