//! Space-separated class token handling for the `class` attribute.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display};

/// An ordered set of CSS class tokens.
///
/// Tokens keep their first-insertion order and are never duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a `class` attribute value, splitting on ASCII whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        list.add(value);
        list
    }

    /// Adds every token in `tokens`. Returns `true` if at least one was new.
    pub fn add(&mut self, tokens: &str) -> bool {
        let mut changed = false;
        for token in tokens.split_ascii_whitespace() {
            if !self.contains(token) {
                self.0.push(token.into());
                changed = true;
            }
        }
        changed
    }

    /// Removes every token in `tokens`. Returns `true` if anything was removed.
    pub fn remove(&mut self, tokens: &str) -> bool {
        let before = self.0.len();
        for token in tokens.split_ascii_whitespace() {
            self.0.retain(|existing| existing != token);
        }
        before != self.0.len()
    }

    /// Flips a single token and returns whether it is now present.
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token);
            true
        }
    }

    /// Returns `true` if `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|existing| existing == token)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut list = Self::new();
        for tokens in iter {
            list.add(tokens);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parse_normalizes_whitespace_and_duplicates() {
        let list = ClassList::parse("  card   card-body card\tcard--wide ");
        assert_eq!(list.to_string(), "card card-body card--wide");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_then_remove_restores_previous_value() {
        let mut list = ClassList::parse("button button-primary");
        let before = list.clone();
        assert!(list.add("is-busy"));
        assert!(list.remove("is-busy"));
        assert_eq!(list, before);
    }

    #[test]
    fn toggling_twice_is_identity() {
        let mut list = ClassList::parse("notice");
        let before = list.clone();
        assert!(list.toggle("is-dismissible"));
        assert!(!list.toggle("is-dismissible"));
        assert_eq!(list, before);
    }

    #[test]
    fn adding_existing_token_reports_no_change() {
        let mut list = ClassList::parse("a b");
        assert!(!list.add("b a"));
        assert!(list.add("b c"));
        assert_eq!(list.to_string(), "a b c");
    }
}
