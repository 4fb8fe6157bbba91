//! Groups of checkboxes or radio buttons sharing one field name.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::{input::input, style};

/// Whether a group allows one or several values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Several values, submitted as `name[]`.
    #[default]
    Checkbox,
    /// Exactly one value.
    Radio,
}

impl ChoiceKind {
    const fn input_type(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// Configuration shared by [`CheckboxGroup`] and [`RadioGroup`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ChoiceConfig {
    /// Input flavor.
    pub kind: ChoiceKind,
    /// Field name.
    pub name: String,
    /// Optional `<legend>`.
    pub legend: Option<String>,
    /// `(value, label)` pairs, in order.
    pub choices: Vec<(String, String)>,
    /// Checked values. Radio groups only honor the first one.
    pub checked: Vec<String>,
    /// Lay choices out on one line.
    pub inline: bool,
}

impl Block for ChoiceConfig {
    const NAME: &'static str = "choice-group";
}

impl ChoiceConfig {
    fn is_checked(&self, value: &str) -> bool {
        match self.kind {
            ChoiceKind::Checkbox => self.checked.iter().any(|checked| checked == value),
            ChoiceKind::Radio => self.checked.first().is_some_and(|checked| checked == value),
        }
    }
}

impl Build for ChoiceConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-choice-group", style::CHOICE_GROUP);
        let parts = Self::parts();

        let name = match self.kind {
            ChoiceKind::Checkbox => format!("{}[]", self.name.trim_end_matches("[]")),
            ChoiceKind::Radio => self.name.clone(),
        };

        let mut fieldset = html::element("fieldset")
            .class(Self::NAME)
            .class(&parts.variant(self.kind.input_type()));
        if self.inline {
            fieldset.add_class(&parts.variant("inline"));
        }
        if let Some(legend) = &self.legend {
            fieldset.push_child(
                html::element("legend")
                    .class("screen-reader-text")
                    .text(env.translate(legend)),
            );
        }

        for (index, (value, label)) in self.choices.iter().enumerate() {
            let id = format!("{}-{index}", markupui_core::parts::sanitize_token(&self.name));
            fieldset.push_child(
                html::element("label")
                    .class(&parts.part("item"))
                    .attr("for", id.as_str())
                    .child(
                        input(self.kind.input_type(), &name)
                            .id(id)
                            .attr("value", value.as_str())
                            .attr("checked", self.is_checked(value)),
                    )
                    .text(format!(" {label}")),
            );
        }
        fieldset.into()
    }
}

configurable!(
    /// Checkboxes submitting an array of values.
    CheckboxGroup,
    ChoiceConfig
);

configurable!(
    /// Radio buttons submitting one value.
    RadioGroup,
    ChoiceConfig
);

macro_rules! choice_setters {
    ($view:ident, $kind:expr) => {
        impl $view {
            /// Creates an empty group named `name`.
            pub fn new(env: &Environment, name: impl Into<String>) -> Self {
                Self::from_config(
                    env,
                    ChoiceConfig {
                        kind: $kind,
                        name: name.into(),
                        ..ChoiceConfig::default()
                    },
                )
            }

            /// Appends a choice.
            pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
                self.config_mut().choices.push((value.into(), label.into()));
                self
            }

            /// Appends several `(value, label)` choices.
            pub fn choices<V, L>(mut self, choices: impl IntoIterator<Item = (V, L)>) -> Self
            where
                V: Into<String>,
                L: Into<String>,
            {
                self.config_mut().choices.extend(
                    choices
                        .into_iter()
                        .map(|(value, label)| (value.into(), label.into())),
                );
                self
            }

            /// Sets a visually hidden legend.
            pub fn legend(mut self, legend: impl Into<String>) -> Self {
                self.config_mut().legend = Some(legend.into());
                self
            }

            /// Lays the choices out on one line.
            pub fn inline(mut self) -> Self {
                self.config_mut().inline = true;
                self
            }
        }
    };
}

choice_setters!(CheckboxGroup, ChoiceKind::Checkbox);
choice_setters!(RadioGroup, ChoiceKind::Radio);

impl CheckboxGroup {
    /// Checks `value`. May be called repeatedly.
    pub fn checked(mut self, value: impl Into<String>) -> Self {
        self.config_mut().checked.push(value.into());
        self
    }
}

impl RadioGroup {
    /// Selects `value`, replacing any earlier selection.
    pub fn checked(mut self, value: impl Into<String>) -> Self {
        let config = self.config_mut();
        config.checked.clear();
        config.checked.push(value.into());
        self
    }
}

/// Creates a checkbox group named `name` with `(value, label)` choices.
pub fn checkbox_group<V: Into<String>, L: Into<String>>(
    env: &Environment,
    name: impl Into<String>,
    choices: impl IntoIterator<Item = (V, L)>,
) -> CheckboxGroup {
    CheckboxGroup::new(env, name).choices(choices)
}

/// Creates a radio group named `name` with `(value, label)` choices.
pub fn radio_group<V: Into<String>, L: Into<String>>(
    env: &Environment,
    name: impl Into<String>,
    choices: impl IntoIterator<Item = (V, L)>,
) -> RadioGroup {
    RadioGroup::new(env, name).choices(choices)
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn checkbox_group_submits_array() {
        let env = Environment::new();
        let markup = checkbox_group(&env, "caps", [("read", "Read"), ("edit", "Edit")])
            .checked("edit")
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<fieldset class="choice-group choice-group--checkbox">"#,
                r#"<label class="choice-group-item" for="caps-0"><input type="checkbox" name="caps[]" id="caps-0" value="read"> Read</label>"#,
                r#"<label class="choice-group-item" for="caps-1"><input type="checkbox" name="caps[]" id="caps-1" value="edit" checked> Edit</label>"#,
                "</fieldset>"
            )
        );
    }

    #[test]
    fn radio_group_keeps_single_selection() {
        let env = Environment::new();
        let markup = radio_group(&env, "status", [("draft", "Draft"), ("publish", "Published")])
            .checked("draft")
            .checked("publish")
            .inline()
            .legend("Status")
            .render();
        assert!(markup.starts_with(
            r#"<fieldset class="choice-group choice-group--radio choice-group--inline"><legend class="screen-reader-text">Status</legend>"#
        ));
        assert_eq!(markup.matches(" checked").count(), 1);
        assert!(markup.contains(r#"value="publish" checked"#));
        assert!(markup.contains(r#"name="status""#));
    }
}
