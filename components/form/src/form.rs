//! The `<form>` builder and CSRF nonce fields.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Keyword, Node, configurable, html,
};

use crate::{input::submit, style};

/// Field name used for nonces when none is given.
pub const DEFAULT_NONCE_NAME: &str = "_wpnonce";

markupui_core::keyword! {
    /// HTTP method of a form.
    pub enum Method: "method" {
        /// Query-string submission.
        Get => "get",
        /// Body submission.
        Post => "post",
    } default Post
}

/// Hidden CSRF field for `action`, named [`DEFAULT_NONCE_NAME`].
#[must_use]
pub fn nonce_field(env: &Environment, action: &str) -> Node {
    env.nonce_field(action, DEFAULT_NONCE_NAME)
}

/// Configuration for [`Form`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct FormConfig {
    /// Submission URL; empty posts back to the current page.
    pub action: String,
    /// HTTP method.
    pub method: Method,
    /// Nonce action and field name.
    pub nonce: Option<(String, String)>,
    /// Rows and controls, in order.
    pub fields: Vec<Node>,
    /// Label of the submit button; `None` omits the button.
    pub submit_label: Option<String>,
    /// Sends `multipart/form-data` for file uploads.
    pub multipart: bool,
}

impl Block for FormConfig {
    const NAME: &'static str = "form";
}

impl Build for FormConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-form", style::FORM);
        let parts = Self::parts();

        let mut form = html::element("form")
            .class(Self::NAME)
            .attr("action", env.url(&self.action))
            .attr("method", self.method.as_str());
        if self.multipart {
            form.set_attr("enctype", "multipart/form-data");
        }
        if let Some((action, name)) = &self.nonce {
            form.push_child(env.nonce_field(action, name));
        }
        form.children_mut().extend(self.fields.iter().cloned());
        if let Some(label) = &self.submit_label {
            form.push_child(
                html::element("p")
                    .class(&parts.part("submit"))
                    .child(submit(&env.translate(label))),
            );
        }
        form.into()
    }
}

configurable!(
    /// A form with an optional nonce and submit button.
    ///
    /// ```ignore
    /// Form::new(&env, "options.php")
    ///     .nonce("update-options")
    ///     .field(field(&env, "Title", "blogname", text_input("blogname", "")))
    ///     .submit_label("Save Changes")
    /// ```
    Form,
    FormConfig
);

impl Form {
    /// Creates a POST form submitting to `action`, with a "Save Changes" button.
    pub fn new(env: &Environment, action: impl Into<String>) -> Self {
        Self::from_config(
            env,
            FormConfig {
                action: action.into(),
                submit_label: Some("Save Changes".into()),
                ..FormConfig::default()
            },
        )
    }

    /// Sets the method.
    pub fn method(mut self, method: Method) -> Self {
        self.config_mut().method = method;
        self
    }

    /// Sets the method from a keyword; unknown keywords fall back to POST.
    pub fn method_keyword(self, method: &str) -> Self {
        self.method(Method::parse_or_default(method))
    }

    /// Adds a nonce for `action` under the default field name.
    pub fn nonce(self, action: impl Into<String>) -> Self {
        self.nonce_named(action, DEFAULT_NONCE_NAME)
    }

    /// Adds a nonce for `action` under `field_name`.
    pub fn nonce_named(mut self, action: impl Into<String>, field_name: impl Into<String>) -> Self {
        self.config_mut().nonce = Some((action.into(), field_name.into()));
        self
    }

    /// Appends a row or control.
    pub fn field(mut self, field: impl Into<Node>) -> Self {
        self.config_mut().fields.push(field.into());
        self
    }

    /// Sets the submit button label.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.config_mut().submit_label = Some(label.into());
        self
    }

    /// Removes the submit button.
    pub fn without_submit(mut self) -> Self {
        self.config_mut().submit_label = None;
        self
    }

    /// Switches to `multipart/form-data`.
    pub fn multipart(mut self) -> Self {
        self.config_mut().multipart = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::{Render, host::Csrf};

    use super::*;
    use crate::input::hidden;

    #[derive(Debug)]
    struct FixedToken;

    impl Csrf for FixedToken {
        fn token(&self, action: &str) -> String {
            format!("{action}-token")
        }
    }

    #[test]
    fn posts_with_nonce_and_submit() {
        let env = Environment::builder().csrf(FixedToken).build();
        let markup = Form::new(&env, "options.php")
            .nonce("update")
            .field(hidden("option_page", "general"))
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<form class="form" action="options.php" method="post">"#,
                r#"<input type="hidden" id="_wpnonce" name="_wpnonce" value="update-token">"#,
                r#"<input type="hidden" name="option_page" value="general">"#,
                r#"<p class="form-submit"><button type="submit" class="button button-primary">Save Changes</button></p>"#,
                "</form>"
            )
        );
    }

    #[test]
    fn unknown_method_falls_back_to_post() {
        let env = Environment::new();
        let form = Form::new(&env, "").method_keyword("PATCH").without_submit();
        assert_eq!(form.config().method, Method::Post);
        assert_eq!(form.render(), r#"<form class="form" action="" method="post"></form>"#);
        assert_eq!("GET".parse::<Method>(), Ok(Method::Get));
    }

    #[test]
    fn multipart_sets_enctype() {
        let env = Environment::new();
        let markup = Form::new(&env, "upload.php").multipart().without_submit().render();
        assert!(markup.contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn default_nonce_field_has_empty_value() {
        let env = Environment::new();
        assert_eq!(
            nonce_field(&env, "delete").render(),
            r#"<input type="hidden" id="_wpnonce" name="_wpnonce" value="">"#
        );
    }
}
