//! Progress bars.

use markupui_core::{Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html};
use markupui_format::percentage;

use crate::style;

/// Configuration for [`ProgressBar`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ProgressBarConfig {
    /// Progress so far, clamped into `0..=max` when rendered.
    pub value: f64,
    /// Value of a full bar.
    pub max: f64,
    /// Accessible name.
    pub label: Option<String>,
    /// Shows the percentage inside the bar.
    pub show_value: bool,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            max: 100.0,
            label: None,
            show_value: true,
        }
    }
}

impl ProgressBarConfig {
    /// The value clamped into `0..=max`; zero for a non-positive or non-finite bound.
    #[must_use]
    pub fn clamped(&self) -> f64 {
        if !(self.max.is_finite() && self.max > 0.0 && self.value.is_finite()) {
            return 0.0;
        }
        self.value.clamp(0.0, self.max)
    }
}

impl Block for ProgressBarConfig {
    const NAME: &'static str = "progress-bar";
}

impl Build for ProgressBarConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-progress-bar", style::PROGRESS_BAR);
        let parts = Self::parts();
        let max = if self.max.is_finite() && self.max > 0.0 { self.max } else { 0.0 };
        let width = percentage(self.value, self.max, env.config().precision);

        let mut bar = html::div()
            .class(Self::NAME)
            .attr("role", "progressbar")
            .aria("valuemin", 0)
            .aria("valuemax", max)
            .aria("valuenow", self.clamped())
            .aria("label", self.label.as_deref().map(|label| env.translate(label)))
            .child(
                html::div()
                    .class(&parts.part("fill"))
                    .style(&format!("width: {width}")),
            );
        if self.show_value {
            bar.push_child(
                html::span()
                    .class(&parts.part("label"))
                    .text(percentage(self.value, self.max, 0)),
            );
        }
        bar.into()
    }
}

configurable!(
    /// A horizontal bar filled to `value / max`.
    ProgressBar,
    ProgressBarConfig
);

impl ProgressBar {
    /// A bar at `value` out of 100.
    pub fn new(env: &Environment, value: f64) -> Self {
        Self::from_config(
            env,
            ProgressBarConfig {
                value,
                ..ProgressBarConfig::default()
            },
        )
    }

    /// Sets the value of a full bar.
    pub fn max(mut self, max: f64) -> Self {
        self.config_mut().max = max;
        self
    }

    /// Sets the current value.
    pub fn value(mut self, value: f64) -> Self {
        self.config_mut().value = value;
        self
    }

    /// Sets the accessible name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config_mut().label = Some(label.into());
        self
    }

    /// Hides the percentage text.
    pub fn hide_value(mut self) -> Self {
        self.config_mut().show_value = false;
        self
    }
}

/// Creates a bar showing `value` out of `max`.
pub fn progress_bar(env: &Environment, value: f64, max: f64) -> ProgressBar {
    ProgressBar::new(env, value).max(max)
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::*;

    #[test]
    fn renders_fill_and_aria_values() {
        let env = Environment::new();
        let markup = progress_bar(&env, 42.0, 100.0).label("Import").render();
        assert_eq!(
            markup,
            concat!(
                r#"<div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="42" aria-label="Import">"#,
                r#"<div class="progress-bar-fill" style="width: 42%"></div>"#,
                r#"<span class="progress-bar-label">42%</span></div>"#
            )
        );
    }

    #[test]
    fn values_are_clamped() {
        let env = Environment::new();
        let over = progress_bar(&env, 150.0, 100.0).hide_value().render();
        assert!(over.contains(r#"aria-valuenow="100""#));
        assert!(over.contains("width: 100%"));
        assert!(!over.contains("progress-bar-label"));

        let under = progress_bar(&env, -5.0, 10.0).render();
        assert!(under.contains(r#"aria-valuenow="0""#));
        assert!(under.contains(">0%<"));
    }

    #[test]
    fn zero_max_renders_an_empty_bar() {
        let env = Environment::new();
        let markup = progress_bar(&env, 5.0, 0.0).render();
        assert!(markup.contains(r#"aria-valuemax="0" aria-valuenow="0""#));
        assert!(markup.contains("width: 0%"));
    }

    #[test]
    fn fraction_uses_configured_precision() {
        let env = Environment::new();
        let markup = progress_bar(&env, 1.0, 3.0).render();
        assert!(markup.contains("width: 33.3%"));
        assert!(markup.contains(">33%<"));
    }
}
