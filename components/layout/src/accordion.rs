//! Collapsible sections built on `<details>`/`<summary>`.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// Configuration for [`Accordion`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct AccordionConfig {
    /// `(title, content)` sections, in order.
    pub items: Vec<(String, Node)>,
    /// Index of the section open on load. Out-of-range indices open nothing.
    pub open: Option<usize>,
}

impl Block for AccordionConfig {
    const NAME: &'static str = "accordion";
}

impl Build for AccordionConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-accordion", style::ACCORDION);
        let parts = Self::parts();

        if self.open.is_some_and(|index| index >= self.items.len()) {
            tracing::debug!(open = ?self.open, items = self.items.len(), "accordion open index out of range");
        }

        html::div()
            .class(Self::NAME)
            .with_children(self.items.iter().enumerate().map(|(index, (title, content))| {
                html::element("details")
                    .class(&parts.part("item"))
                    .attr("open", self.open == Some(index))
                    .child(
                        html::element("summary")
                            .class(&parts.part("title"))
                            .text(env.translate(title)),
                    )
                    .child(html::div().class(&parts.part("content")).child(content.clone()))
            }))
            .into()
    }
}

configurable!(
    /// Stacked collapsible sections.
    Accordion,
    AccordionConfig
);

impl Accordion {
    /// An accordion with no sections.
    pub fn new(env: &Environment) -> Self {
        Self::from_config(env, AccordionConfig::default())
    }

    /// Appends a section.
    pub fn item(mut self, title: impl Into<String>, content: impl Into<Node>) -> Self {
        self.config_mut().items.push((title.into(), content.into()));
        self
    }

    /// Opens the section at `index` on load.
    pub fn open(mut self, index: usize) -> Self {
        self.config_mut().open = Some(index);
        self
    }
}
