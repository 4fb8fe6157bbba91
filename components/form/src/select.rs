//! `<select>` with options, option groups and multi-selection.

use markupui_core::{
    Block, Build, Element, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// One `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether the option can be picked.
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for SelectOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// An entry in a select: a single option or a labelled group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// A plain `<option>`.
    Option(SelectOption),
    /// An `<optgroup>`.
    Group {
        /// Group caption.
        label: String,
        /// Options inside the group.
        options: Vec<SelectOption>,
    },
}

impl From<SelectOption> for SelectItem {
    fn from(option: SelectOption) -> Self {
        Self::Option(option)
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for SelectItem {
    fn from(option: (V, L)) -> Self {
        Self::Option(option.into())
    }
}

/// Configuration for [`Select`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct SelectConfig {
    /// Field name. Multi-selects get a `[]` suffix on output.
    pub name: String,
    /// Options and groups, in order.
    pub items: Vec<SelectItem>,
    /// Selected values.
    pub selected: Vec<String>,
    /// Label of a leading empty-value option.
    pub placeholder: Option<String>,
    /// Allows several values.
    pub multiple: bool,
}

impl Block for SelectConfig {
    const NAME: &'static str = "select";
}

impl SelectConfig {
    fn has_value(&self, value: &str) -> bool {
        self.items.iter().any(|item| match item {
            SelectItem::Option(option) => option.value == value,
            SelectItem::Group { options, .. } => options.iter().any(|option| option.value == value),
        })
    }

    fn option(&self, option: &SelectOption) -> Element {
        html::element("option")
            .attr("value", option.value.as_str())
            .attr("selected", self.selected.contains(&option.value))
            .attr("disabled", option.disabled)
            .text(option.label.as_str())
    }
}

impl Build for SelectConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-select", style::SELECT);

        let name = if self.multiple && !self.name.ends_with("[]") {
            format!("{}[]", self.name)
        } else {
            self.name.clone()
        };
        let mut select = html::element("select")
            .attr("name", name)
            .class(Self::NAME)
            .attr("multiple", self.multiple);

        if let Some(placeholder) = &self.placeholder {
            select.push_child(
                html::element("option")
                    .attr("value", "")
                    .text(env.translate(placeholder)),
            );
        }
        for value in &self.selected {
            if !self.has_value(value) {
                tracing::debug!(name = %self.name, value = %value, "selected value matches no option");
            }
        }
        for item in &self.items {
            match item {
                SelectItem::Option(option) => select.push_child(self.option(option)),
                SelectItem::Group { label, options } => select.push_child(
                    html::element("optgroup")
                        .attr("label", label.as_str())
                        .with_children(options.iter().map(|option| self.option(option))),
                ),
            }
        }
        select.into()
    }
}

configurable!(
    /// A drop-down or list box.
    ///
    /// ```ignore
    /// select(&env, "role", [("editor", "Editor"), ("author", "Author")])
    ///     .selected("author")
    ///     .placeholder("Choose a role")
    /// ```
    Select,
    SelectConfig
);

impl Select {
    /// Creates an empty select named `name`.
    pub fn new(env: &Environment, name: impl Into<String>) -> Self {
        Self::from_config(
            env,
            SelectConfig {
                name: name.into(),
                ..SelectConfig::default()
            },
        )
    }

    /// Appends options.
    pub fn options<T: Into<SelectItem>>(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.config_mut()
            .items
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// Appends an `<optgroup>`.
    pub fn group<T: Into<SelectOption>>(
        mut self,
        label: impl Into<String>,
        options: impl IntoIterator<Item = T>,
    ) -> Self {
        self.config_mut().items.push(SelectItem::Group {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Marks `value` selected. On a single select this replaces the selection.
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        let config = self.config_mut();
        if !config.multiple {
            config.selected.clear();
        }
        config.selected.push(value.into());
        self
    }

    /// Adds a leading empty option with this (translated) label.
    pub fn placeholder(mut self, label: impl Into<String>) -> Self {
        self.config_mut().placeholder = Some(label.into());
        self
    }

    /// Allows several selected values.
    pub fn multiple(mut self) -> Self {
        self.config_mut().multiple = true;
        self
    }
}

/// Creates a select named `name` with `options`.
pub fn select<T: Into<SelectItem>>(
    env: &Environment,
    name: impl Into<String>,
    options: impl IntoIterator<Item = T>,
) -> Select {
    Select::new(env, name).options(options)
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn marks_selected_option() {
        let env = Environment::new();
        let markup = select(&env, "role", [("editor", "Editor"), ("author", "Author")])
            .selected("author")
            .render();
        assert_eq!(
            markup,
            r#"<select name="role" class="select"><option value="editor">Editor</option><option value="author" selected>Author</option></select>"#
        );
    }

    #[test]
    fn multiple_selects_use_array_names() {
        let env = Environment::new();
        let markup = Select::new(&env, "cats")
            .multiple()
            .options([("1", "News"), ("2", "Events")])
            .selected("1")
            .selected("2")
            .render();
        assert!(markup.starts_with(r#"<select name="cats[]" class="select" multiple>"#));
        assert_eq!(markup.matches(" selected").count(), 2);
    }

    #[test]
    fn groups_and_placeholder() {
        let env = Environment::new();
        let markup = Select::new(&env, "tz")
            .placeholder("Select a city")
            .group(
                "Europe",
                [SelectOption::new("berlin", "Berlin"), SelectOption::new("oslo", "Oslo").disabled()],
            )
            .render();
        assert_eq!(
            markup,
            r#"<select name="tz" class="select"><option value="">Select a city</option><optgroup label="Europe"><option value="berlin">Berlin</option><option value="oslo" disabled>Oslo</option></optgroup></select>"#
        );
    }
}
