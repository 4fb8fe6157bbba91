//! Admin notices.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Keyword, Node, configurable, html,
};

use crate::style;

markupui_core::keyword! {
    /// Notice severity; selects the `notice-{kind}` class.
    pub enum NoticeKind: "notice kind" {
        /// Neutral information.
        Info => "info",
        /// A completed action.
        Success => "success",
        /// Something needs attention.
        Warning => "warning",
        /// A failed action.
        Error => "error",
    } default Info
}

/// Configuration for [`Notice`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct NoticeConfig {
    /// Severity.
    pub kind: NoticeKind,
    /// Bold heading above the message.
    pub title: Option<String>,
    /// Message body.
    pub message: Node,
    /// Adds a dismiss button.
    pub dismissible: bool,
    /// Renders inline instead of being moved below the page heading.
    pub inline: bool,
}

impl Block for NoticeConfig {
    const NAME: &'static str = "notice";
}

impl Build for NoticeConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-notice", style::NOTICE);
        let parts = Self::parts();

        let mut notice = html::div()
            .class(Self::NAME)
            .class(&parts.part(self.kind.as_str()));
        if self.dismissible {
            notice.add_class("is-dismissible");
        }
        if self.inline {
            notice.add_class("inline");
        }
        if matches!(self.kind, NoticeKind::Error | NoticeKind::Warning) {
            notice.set_attr("role", "alert");
        }

        if let Some(title) = &self.title {
            notice.push_child(
                html::element("p")
                    .class(&parts.part("title"))
                    .child(html::strong(env.translate(title))),
            );
        }
        notice.push_child(html::element("p").child(self.message.clone()));
        if self.dismissible {
            notice.push_child(
                html::element("button")
                    .attr("type", "button")
                    .class("notice-dismiss")
                    .child(
                        html::span()
                            .class("screen-reader-text")
                            .text(env.translate("Dismiss this notice.")),
                    ),
            );
        }
        notice.into()
    }
}

configurable!(
    /// A message box at the top of an admin screen.
    Notice,
    NoticeConfig
);

impl Notice {
    /// A notice of `kind` showing `message`.
    pub fn new(env: &Environment, kind: NoticeKind, message: impl Into<Node>) -> Self {
        Self::from_config(
            env,
            NoticeConfig {
                kind,
                message: message.into(),
                ..NoticeConfig::default()
            },
        )
    }

    /// Sets the severity from a keyword; unknown keywords give an info notice.
    pub fn kind_keyword(mut self, kind: &str) -> Self {
        self.config_mut().kind = NoticeKind::parse_or_default(kind);
        self
    }

    /// Sets the heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config_mut().title = Some(title.into());
        self
    }

    /// Adds a dismiss button.
    pub fn dismissible(mut self) -> Self {
        self.config_mut().dismissible = true;
        self
    }

    /// Keeps the notice where it is rendered.
    pub fn inline(mut self) -> Self {
        self.config_mut().inline = true;
        self
    }
}

/// Creates a notice from a kind keyword and a plain-text message.
pub fn notice(env: &Environment, kind: &str, message: impl Into<String>) -> Notice {
    Notice::new(env, NoticeKind::parse_or_default(kind), Node::text(message))
}

#[cfg(test)]
mod tests {
    use markupui_core::{Render, host::Translator};

    use super::*;

    #[derive(Debug)]
    struct Shouting;

    impl Translator for Shouting {
        fn translate(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn success_notice() {
        let env = Environment::new();
        assert_eq!(
            notice(&env, "success", "Settings saved.").render(),
            r#"<div class="notice notice-success"><p>Settings saved.</p></div>"#
        );
    }

    #[test]
    fn dismissible_error_with_title() {
        let env = Environment::new();
        let markup = Notice::new(&env, NoticeKind::Error, "Upload failed <again>")
            .title("Error")
            .dismissible()
            .render();
        assert_eq!(
            markup,
            concat!(
                r#"<div class="notice notice-error is-dismissible" role="alert">"#,
                r#"<p class="notice-title"><strong>Error</strong></p>"#,
                "<p>Upload failed &lt;again&gt;</p>",
                r#"<button type="button" class="notice-dismiss"><span class="screen-reader-text">Dismiss this notice.</span></button>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn chrome_is_translated_but_message_is_not() {
        let env = Environment::builder().translator(Shouting).build();
        let markup = notice(&env, "warning", "Disk almost full.")
            .title("Heads up")
            .dismissible()
            .render();
        assert!(markup.contains("<strong>HEADS UP</strong>"));
        assert!(markup.contains("<p>Disk almost full.</p>"));
        assert!(markup.contains(r#"<span class="screen-reader-text">DISMISS THIS NOTICE.</span>"#));
    }

    #[test]
    fn unknown_kind_is_info() {
        let env = Environment::new();
        let markup = notice(&env, "catastrophe", "x").inline().render();
        assert_eq!(markup, r#"<div class="notice notice-info inline"><p>x</p></div>"#);
    }
}
