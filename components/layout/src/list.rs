//! Bulleted or numbered lists with optional per-item icons.

use markupui_core::{
    Block, Build, Element, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Item contents.
    pub content: Node,
    /// Icon name from the configured icon set.
    pub icon: Option<String>,
}

macro_rules! list_item_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ListItem {
                fn from(content: $ty) -> Self {
                    Self {
                        content: content.into(),
                        icon: None,
                    }
                }
            }
        )*
    };
}

list_item_from!(Node, Element, &str, String);

/// Configuration for [`List`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ListConfig {
    /// Entries, in order.
    pub items: Vec<ListItem>,
    /// Renders `<ol>` instead of `<ul>`.
    pub ordered: bool,
    /// Shown instead of the list when there are no items.
    pub empty_message: Option<String>,
}

impl Block for ListConfig {
    const NAME: &'static str = "list";
}

impl Build for ListConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-list", style::LIST);
        let parts = Self::parts();

        let empty = self.empty_message.as_ref().filter(|_| self.items.is_empty());
        if let Some(message) = empty {
            return html::p(env.translate(message))
                .class(Self::NAME)
                .class(&parts.part("empty"))
                .into();
        }

        let mut list = if self.ordered {
            html::element("ol").class(Self::NAME).class(&parts.variant("ordered"))
        } else {
            html::element("ul").class(Self::NAME)
        };
        for item in &self.items {
            let mut li = html::element("li").class(&parts.part("item"));
            if let Some(icon) = &item.icon {
                li.push_child(html::icon(&env.config().icon_set, icon).class(&parts.part("icon")));
            }
            li.push_child(item.content.clone());
            list.push_child(li);
        }
        list.into()
    }
}

configurable!(
    /// A list of items.
    List,
    ListConfig
);

impl List {
    /// An empty unordered list.
    pub fn new(env: &Environment) -> Self {
        Self::from_config(env, ListConfig::default())
    }

    /// Appends an item.
    pub fn item(mut self, item: impl Into<ListItem>) -> Self {
        self.config_mut().items.push(item.into());
        self
    }

    /// Appends an item with an icon.
    pub fn item_with_icon(mut self, icon: impl Into<String>, content: impl Into<Node>) -> Self {
        self.config_mut().items.push(ListItem {
            content: content.into(),
            icon: Some(icon.into()),
        });
        self
    }

    /// Appends several items.
    pub fn items<T: Into<ListItem>>(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.config_mut()
            .items
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// Numbers the items.
    pub fn ordered(mut self) -> Self {
        self.config_mut().ordered = true;
        self
    }

    /// Sets the text shown when there are no items.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.config_mut().empty_message = Some(message.into());
        self
    }
}

/// Creates an unordered list of `items`.
pub fn list<T: Into<ListItem>>(env: &Environment, items: impl IntoIterator<Item = T>) -> List {
    List::new(env).items(items)
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn three_items_in_order() {
        let env = Environment::new();
        assert_eq!(
            list(&env, ["alpha", "beta", "gamma"]).render(),
            r#"<ul class="list"><li class="list-item">alpha</li><li class="list-item">beta</li><li class="list-item">gamma</li></ul>"#
        );
    }

    #[test]
    fn ordered_with_icons() {
        let env = Environment::new();
        let markup = List::new(&env)
            .ordered()
            .item_with_icon("yes", "Backups enabled")
            .render();
        assert_eq!(
            markup,
            r#"<ol class="list list--ordered"><li class="list-item"><span class="dashicons dashicons-yes list-icon" aria-hidden="true"></span>Backups enabled</li></ol>"#
        );
    }

    #[test]
    fn empty_lists_show_message() {
        let env = Environment::new();
        assert_eq!(
            List::new(&env).empty_message("Nothing here.").render(),
            r#"<p class="list list-empty">Nothing here.</p>"#
        );
        assert_eq!(List::new(&env).render(), r#"<ul class="list"></ul>"#);
    }
}
