//! Loading [`Config`] from JSON.
//!
//! Missing keys keep their defaults, so `{}` is a valid configuration:
//!
//! ```
//! let config = markupui::config::load_config(r#"{ "avatar_size": 64 }"#).unwrap();
//! assert_eq!(config.avatar_size, 64);
//! assert_eq!(config.icon_set, "dashicons");
//! ```

use markupui_core::{Config, Environment};
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not match [`Config`].
    #[error("invalid markupui configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// An icon set that cannot be used as a class prefix.
    #[error("icon set `{0}` is not a single class token")]
    InvalidIconSet(String),
    /// A zero avatar size.
    #[error("avatar size must be at least one pixel")]
    ZeroAvatarSize,
}

/// Checks the values serde cannot.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidIconSet`] for an empty or whitespace-bearing
/// icon set, and [`ConfigError::ZeroAvatarSize`] for a zero avatar size.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.icon_set.is_empty() || config.icon_set.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidIconSet(config.icon_set.clone()));
    }
    if config.avatar_size == 0 {
        return Err(ConfigError::ZeroAvatarSize);
    }
    Ok(())
}

/// Parses and validates a JSON configuration.
///
/// # Errors
///
/// Returns [`ConfigError`] if the JSON is malformed, carries an unknown size
/// keyword, or fails [`validate`].
pub fn load_config(json: &str) -> Result<Config, ConfigError> {
    let parsed = serde_json::from_str::<Config>(json)
        .map_err(ConfigError::from)
        .and_then(|config| validate(&config).map(|()| config));
    if let Err(error) = &parsed {
        tracing::warn!(%error, "rejected configuration");
    }
    parsed
}

/// Serializes a configuration as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] if serialization fails.
pub fn to_json(config: &Config) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// A default [`Environment`] running on the configuration in `json`.
///
/// # Errors
///
/// Returns [`ConfigError`] under the same conditions as [`load_config`].
pub fn environment_from_json(json: &str) -> Result<Environment, ConfigError> {
    let config = load_config(json)?;
    Ok(Environment::builder().config(config).build())
}

#[cfg(test)]
mod tests {
    use markupui_core::Size;

    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = load_config(r#"{ "default_size": "small", "binary_units": false }"#).unwrap();
        assert_eq!(config.default_size, Size::Small);
        assert!(!config.binary_units);
        assert_eq!(config.precision, 1);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(load_config("{"), Err(ConfigError::Json(_))));
        assert!(matches!(
            load_config(r#"{ "default_size": "gigantic" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn semantic_checks() {
        assert!(matches!(
            load_config(r#"{ "icon_set": "font awesome" }"#),
            Err(ConfigError::InvalidIconSet(set)) if set == "font awesome"
        ));
        assert!(matches!(
            load_config(r#"{ "avatar_size": 0 }"#),
            Err(ConfigError::ZeroAvatarSize)
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            avatar_size: 96,
            ..Config::default()
        };
        assert_eq!(load_config(&to_json(&config).unwrap()).unwrap(), config);
    }

    #[test]
    fn environment_uses_loaded_config() {
        let env = environment_from_json(r#"{ "enqueue_assets": false }"#).unwrap();
        assert!(!env.config().enqueue_assets);
    }
}
