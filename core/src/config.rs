//! Site-wide rendering settings, installed into the [`Environment`](crate::Environment).

use alloc::string::String;

use crate::keyword::Size;

/// Settings shared by every component rendered against one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Icon font class prefix. `dashicons` yields `dashicons dashicons-{name}`.
    pub icon_set: String,
    /// Default avatar edge length in pixels.
    pub avatar_size: u32,
    /// Size used when a component is given none or an unknown one.
    pub default_size: Size,
    /// Format byte counts with 1024-based units (`KiB`) instead of 1000-based (`KB`).
    pub binary_units: bool,
    /// Whether components enqueue their stylesheets and scripts.
    pub enqueue_assets: bool,
    /// Digits after the decimal point for byte counts and short numbers.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_set: "dashicons".into(),
            avatar_size: 32,
            default_size: Size::Medium,
            binary_units: true,
            enqueue_assets: true,
            precision: 1,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "avatar_size": 48, "default_size": "large" }"#)
                .expect("valid config");
        assert_eq!(config.avatar_size, 48);
        assert_eq!(config.default_size, Size::Large);
        assert_eq!(config.icon_set, "dashicons");
    }

    #[test]
    fn unknown_size_is_rejected() {
        let result = serde_json::from_str::<Config>(r#"{ "default_size": "huge" }"#);
        assert!(result.is_err());
    }
}
