//! A labelled form row: label, control, description and error message.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// Configuration for [`Field`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct FieldConfig {
    /// Label text.
    pub label: String,
    /// The `id` of the control the label points at.
    pub control_id: String,
    /// The control itself.
    pub control: Node,
    /// Help text under the control.
    pub description: Option<String>,
    /// Validation message; marks the row invalid.
    pub error: Option<String>,
    /// Shows a required marker.
    pub required: bool,
}

impl Block for FieldConfig {
    const NAME: &'static str = "field";
}

impl Build for FieldConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-field", style::FIELD);
        let parts = Self::parts();

        let mut label = html::element("label")
            .class(&parts.part("label"))
            .attr("for", self.control_id.as_str())
            .text(self.label.as_str());
        if self.required {
            label.push_child(
                html::span()
                    .class(&parts.part("required"))
                    .attr("title", env.translate("required"))
                    .text("*"),
            );
        }

        let mut row = html::div().class(Self::NAME);
        if self.required {
            row.add_class(&parts.variant("required"));
        }
        if self.error.is_some() {
            row.add_class(&parts.variant("invalid"));
        }

        let mut control = self.control.clone();
        if let Some(element) = control.root_element_mut() {
            if self.required {
                element.set_attr("required", true);
            }
            if self.description.is_some() {
                element.set_attr("aria-describedby", format!("{}-description", self.control_id));
            }
            if self.error.is_some() {
                element.set_attr("aria-invalid", "true");
            }
        }

        row = row
            .child(label)
            .child(html::div().class(&parts.part("control")).child(control));
        if let Some(description) = &self.description {
            row.push_child(
                html::p(description.as_str())
                    .class(&parts.part("description"))
                    .id(format!("{}-description", self.control_id)),
            );
        }
        if let Some(error) = &self.error {
            row.push_child(
                html::p(error.as_str())
                    .class(&parts.part("error"))
                    .attr("role", "alert"),
            );
        }
        row.into()
    }
}

configurable!(
    /// A form row pairing a label with a control.
    ///
    /// The control's root element receives `required`, `aria-describedby`
    /// and `aria-invalid` as appropriate.
    Field,
    FieldConfig
);

impl Field {
    /// Creates a row for `control`, whose element id is `control_id`.
    pub fn new(
        env: &Environment,
        label: impl Into<String>,
        control_id: impl Into<String>,
        control: impl Into<Node>,
    ) -> Self {
        Self::from_config(
            env,
            FieldConfig {
                label: label.into(),
                control_id: control_id.into(),
                control: control.into(),
                ..FieldConfig::default()
            },
        )
    }

    /// Sets the help text.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.config_mut().description = Some(text.into());
        self
    }

    /// Sets the validation message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.config_mut().error = Some(message.into());
        self
    }

    /// Marks the field required.
    pub fn required(mut self) -> Self {
        self.config_mut().required = true;
        self
    }
}

/// Creates a labelled row; `control` must carry `id="{control_id}"`.
pub fn field(
    env: &Environment,
    label: impl Into<String>,
    control_id: impl Into<String>,
    control: impl Into<Node>,
) -> Field {
    Field::new(env, label, control_id, control)
}
