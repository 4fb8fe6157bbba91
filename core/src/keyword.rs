//! Keyword enums: small closed sets of options spelled as strings in markup
//! and configuration.

use core::str::FromStr;

use crate::error::Error;

/// A closed set of string keywords.
///
/// `FromStr` is strict and reports [`Error::UnknownKeyword`];
/// [`Keyword::parse_or_default`] is the lenient path used while rendering.
pub trait Keyword: FromStr<Err = Error> + Default + Copy {
    /// What the keyword describes, used in error messages.
    const KIND: &'static str;

    /// Parses `value`, logging and discarding unknown input.
    fn parse_lenient(value: &str) -> Option<Self> {
        value
            .parse()
            .map_err(|error: Error| {
                tracing::debug!(%error, kind = Self::KIND, "ignoring unknown keyword");
            })
            .ok()
    }

    /// Parses `value`, falling back to the default for unknown input.
    fn parse_or_default(value: &str) -> Self {
        Self::parse_lenient(value).unwrap_or_default()
    }
}

crate::keyword! {
    /// Component size.
    pub enum Size: "size" {
        /// Compact rendering.
        Small => "small",
        /// The default size.
        Medium => "medium",
        /// Roomy rendering.
        Large => "large",
    } default Medium
}

#[cfg(feature = "serde")]
impl serde::Serialize for Size {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Size {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
