//! Errors for the few explicitly fallible APIs.
//!
//! Rendering itself never fails: invalid options fall back to defaults and
//! missing lookups render placeholders. These errors only come from the
//! strict entry points, such as `FromStr` on keyword enums.

use alloc::string::String;

/// Errors raised by strict parsing and by misuse of helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A CSS block name was empty or contained whitespace.
    #[error("invalid block name {0:?}: expected a non-empty name without whitespace")]
    InvalidBlockName(String),
    /// A keyword did not match any known variant.
    #[error("unknown {kind} keyword {value:?}")]
    UnknownKeyword {
        /// What was being parsed (`size`, `notice`, ...).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_input() {
        let error = Error::UnknownKeyword {
            kind: "size",
            value: "huge".into(),
        };
        assert_eq!(error.to_string(), r#"unknown size keyword "huge""#);
        assert_eq!(
            Error::InvalidBlockName(String::new()).to_string(),
            r#"invalid block name "": expected a non-empty name without whitespace"#
        );
    }
}
