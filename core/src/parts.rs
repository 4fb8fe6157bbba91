//! Class names for component parts: `{block}-{part}` and `{block}--{variant}`.

use alloc::{borrow::Cow, format, string::String};

use crate::error::{Error, Result};

/// A component with a fixed CSS block name.
pub trait Block {
    /// The block name, e.g. `badge`.
    const NAME: &'static str;

    /// Class helper for this block.
    #[must_use]
    fn parts() -> Parts {
        Parts::from_static(Self::NAME)
    }
}

/// Formats class tokens for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parts(Cow<'static, str>);

impl Parts {
    /// Creates a helper for a block name known at compile time.
    ///
    /// The name is trusted; use [`Parts::new`] for names from elsewhere.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a helper for a runtime block name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockName`] if `name` is empty or contains
    /// whitespace, since every generated class would then be malformed.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidBlockName(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Creates a helper for the block of `B`.
    #[must_use]
    pub fn of<B: Block>() -> Self {
        B::parts()
    }

    /// The block name itself.
    #[must_use]
    pub fn block(&self) -> &str {
        &self.0
    }

    /// `{block}-{part}`
    #[must_use]
    pub fn part(&self, part: &str) -> String {
        format!("{}-{part}", self.0)
    }

    /// `{block}--{variant}`, with the variant sanitized into a class token.
    #[must_use]
    pub fn variant(&self, variant: &str) -> String {
        format!("{}--{}", self.0, sanitize_token(variant))
    }

    /// `{block}-{part}--{variant}`
    #[must_use]
    pub fn part_variant(&self, part: &str, variant: &str) -> String {
        format!("{}-{part}--{}", self.0, sanitize_token(variant))
    }
}

/// Reduces arbitrary input to a class-safe token: lowercase ASCII letters,
/// digits, `-` and `_`. Other characters become `-`; runs collapse.
#[must_use]
pub fn sanitize_token(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() || ch == '_' {
            token.push(ch);
        } else if !token.ends_with('-') && !token.is_empty() {
            token.push('-');
        }
    }
    while token.ends_with('-') {
        token.pop();
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Badge;

    impl Block for Badge {
        const NAME: &'static str = "badge";
    }

    #[test]
    fn formats_parts_and_variants() {
        let parts = Parts::of::<Badge>();
        assert_eq!(parts.block(), "badge");
        assert_eq!(parts.part("label"), "badge-label");
        assert_eq!(parts.variant("Large"), "badge--large");
        assert_eq!(parts.part_variant("icon", "spin"), "badge-icon--spin");
    }

    #[test]
    fn rejects_missing_block_name() {
        assert_eq!(Parts::new(""), Err(Error::InvalidBlockName(String::new())));
        assert!(Parts::new("two words").is_err());
        assert!(Parts::new("card").is_ok());
    }

    #[test]
    fn sanitizes_variant_tokens() {
        assert_eq!(sanitize_token(" In Review! "), "in-review");
        assert_eq!(sanitize_token("--draft--"), "draft");
        assert_eq!(sanitize_token("post_status"), "post_status");
    }
}
