//! Ordered attribute maps and the [`HasAttributes`] trait.
//!
//! Attributes keep insertion order so the rendered markup is stable, and
//! re-setting a key replaces its value in place. Two keys get special
//! treatment: `class` is managed as a [`ClassList`], and `style` declarations
//! are concatenated when attribute sets are merged.

use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    class_list::ClassList,
    host::{Escaper, StandardEscaper},
};

/// The value half of an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttrValue {
    /// A regular `key="value"` attribute.
    Text(String),
    /// `true` renders the bare key (`disabled`), `false` omits the attribute.
    Bool(bool),
    /// Omitted from the output.
    #[default]
    Null,
}

impl AttrValue {
    /// Whether this value produces output when rendered.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Bool(true))
    }

    /// Returns the text of a [`AttrValue::Text`] value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for AttrValue {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! numeric_attr {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

numeric_attr!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char);

/// An ordered map of attribute names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    /// Creates an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of stored attributes, including suppressed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attribute is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find_map(|(name, value)| (name == key).then_some(value))
    }

    /// Looks up the text stored for `key`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    /// Returns `true` if `key` is stored, whatever its value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(name, _)| *name == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Removes `key` and returns its previous value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let index = self.0.iter().position(|(name, _)| name == key)?;
        Some(self.0.remove(index).1)
    }

    /// Iterates every stored attribute in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates the attributes that produce output when rendered.
    pub fn rendered(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.iter().filter(|(_, value)| value.is_rendered())
    }

    /// Parses the current `class` attribute.
    #[must_use]
    pub fn class_list(&self) -> ClassList {
        self.get_str("class").map(ClassList::parse).unwrap_or_default()
    }

    /// Replaces the `class` attribute, dropping it entirely when `list` is empty.
    pub fn set_class_list(&mut self, list: &ClassList) {
        if list.is_empty() {
            self.remove("class");
        } else {
            self.set("class", list.to_string());
        }
    }

    /// Adds space-separated class tokens.
    pub fn add_class(&mut self, tokens: &str) {
        let mut list = self.class_list();
        if list.add(tokens) {
            self.set_class_list(&list);
        }
    }

    /// Removes space-separated class tokens.
    pub fn remove_class(&mut self, tokens: &str) {
        let mut list = self.class_list();
        if list.remove(tokens) {
            self.set_class_list(&list);
        }
    }

    /// Flips a class token and returns whether it is now present.
    pub fn toggle_class(&mut self, token: &str) -> bool {
        let mut list = self.class_list();
        let present = list.toggle(token);
        self.set_class_list(&list);
        present
    }

    /// Returns `true` if the `class` attribute contains `token`.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.class_list().contains(token)
    }

    /// Appends CSS declarations to the `style` attribute.
    pub fn add_style(&mut self, declarations: &str) {
        let incoming = declarations.trim().trim_end_matches(';').trim();
        if incoming.is_empty() {
            return;
        }
        let merged = match self.get_str("style") {
            Some(existing) if !existing.trim().is_empty() => {
                let existing = existing.trim().trim_end_matches(';');
                alloc::format!("{existing}; {incoming}")
            }
            _ => incoming.into(),
        };
        self.set("style", merged);
    }

    /// Merges `other` into `self`.
    ///
    /// Class tokens are unioned, style declarations are appended and every
    /// other key takes the incoming value.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            match (key, value) {
                ("class", AttrValue::Text(tokens)) => self.add_class(tokens),
                ("style", AttrValue::Text(declarations)) => self.add_style(declarations),
                _ => self.set(key, value.clone()),
            }
        }
    }

    /// Writes ` key="value"` fragments for every rendered attribute.
    pub fn write_html(&self, out: &mut String) {
        self.write_html_with(&StandardEscaper, out);
    }

    /// Like [`write_html`](Self::write_html), escaping values through `escaper`.
    pub fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        for (key, value) in self.rendered() {
            out.push(' ');
            out.push_str(key);
            if let AttrValue::Text(text) = value {
                out.push_str("=\"");
                escaper.push_attr(out, text);
                out.push('"');
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

/// Anything that carries an attribute map.
///
/// Implementors only provide the two accessors; every helper below is shared,
/// so elements and components manipulate attributes the same way.
pub trait HasAttributes {
    /// Shared access to the attribute map.
    fn attributes(&self) -> &Attributes;

    /// Mutable access to the attribute map.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Sets an attribute in place.
    fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes_mut().set(key, value);
    }

    /// Builder form of [`HasAttributes::set_attr`].
    #[must_use]
    fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self
    where
        Self: Sized,
    {
        self.set_attr(key, value);
        self
    }

    /// Removes an attribute, returning its previous value.
    fn remove_attr(&mut self, key: &str) -> Option<AttrValue> {
        self.attributes_mut().remove(key)
    }

    /// Reads an attribute.
    fn get_attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes().get(key)
    }

    /// Sets the `id` attribute.
    #[must_use]
    fn id(self, id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        let id: String = id.into();
        self.attr("id", id)
    }

    /// Adds class tokens, builder style.
    #[must_use]
    fn class(mut self, tokens: &str) -> Self
    where
        Self: Sized,
    {
        self.add_class(tokens);
        self
    }

    /// Adds class tokens in place.
    fn add_class(&mut self, tokens: &str) {
        self.attributes_mut().add_class(tokens);
    }

    /// Removes class tokens in place.
    fn remove_class(&mut self, tokens: &str) {
        self.attributes_mut().remove_class(tokens);
    }

    /// Flips a class token and returns whether it is now present.
    fn toggle_class(&mut self, token: &str) -> bool {
        self.attributes_mut().toggle_class(token)
    }

    /// Returns `true` if the class token is present.
    fn has_class(&self, token: &str) -> bool {
        self.attributes().has_class(token)
    }

    /// Appends inline CSS declarations.
    #[must_use]
    fn style(mut self, declarations: &str) -> Self
    where
        Self: Sized,
    {
        self.attributes_mut().add_style(declarations);
        self
    }

    /// Sets a `data-*` attribute.
    #[must_use]
    fn data(self, key: &str, value: impl Into<AttrValue>) -> Self
    where
        Self: Sized,
    {
        self.attr(alloc::format!("data-{key}"), value)
    }

    /// Sets an `aria-*` attribute.
    #[must_use]
    fn aria(self, key: &str, value: impl Into<AttrValue>) -> Self
    where
        Self: Sized,
    {
        self.attr(alloc::format!("aria-{key}"), value)
    }

    /// Merges another attribute set using [`Attributes::merge`] rules.
    fn merge_attributes(&mut self, other: &Attributes) {
        self.attributes_mut().merge(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(attributes: &Attributes) -> String {
        let mut out = String::new();
        attributes.write_html(&mut out);
        out
    }

    #[test]
    fn boolean_and_null_values() {
        let attributes: Attributes = [
            ("type", AttrValue::from("checkbox")),
            ("checked", AttrValue::from(true)),
            ("disabled", AttrValue::from(false)),
            ("title", AttrValue::from(None::<&str>)),
        ]
        .into_iter()
        .collect();
        assert_eq!(render(&attributes), r#" type="checkbox" checked"#);
    }

    #[test]
    fn rendered_fragment_count_matches_visible_attributes() {
        let mut attributes = Attributes::new();
        attributes.set("a", "1");
        attributes.set("b", true);
        attributes.set("c", false);
        attributes.set("d", AttrValue::Null);
        attributes.set("e", 5_u32);
        let html = render(&attributes);
        let fragments = html.split(' ').filter(|chunk| !chunk.is_empty()).count();
        assert_eq!(fragments, attributes.rendered().count());
        assert_eq!(fragments, 3);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut attributes = Attributes::new();
        attributes.set("name", "first");
        attributes.set("value", "1");
        attributes.set("name", "second");
        assert_eq!(render(&attributes), r#" name="second" value="1""#);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut attributes = Attributes::new();
        attributes.set("data-Key", "a");
        attributes.set("data-key", "b");
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn values_are_escaped() {
        let mut attributes = Attributes::new();
        attributes.set("title", r#"say "hi" <now>"#);
        assert_eq!(
            render(&attributes),
            r#" title="say &quot;hi&quot; &lt;now&gt;""#
        );
    }

    #[test]
    fn removing_last_class_drops_attribute() {
        let mut attributes = Attributes::new();
        attributes.add_class("only");
        attributes.remove_class("only");
        assert!(!attributes.contains("class"));
        assert_eq!(render(&attributes), "");
    }

    #[test]
    fn merge_unions_classes_and_appends_styles() {
        let mut base: Attributes = [("class", "card"), ("style", "color: red;"), ("id", "a")]
            .into_iter()
            .collect();
        let extra: Attributes = [("class", "card card--wide"), ("style", "margin: 0"), ("id", "b")]
            .into_iter()
            .collect();
        base.merge(&extra);
        assert_eq!(base.get_str("class"), Some("card card--wide"));
        assert_eq!(base.get_str("style"), Some("color: red; margin: 0"));
        assert_eq!(base.get_str("id"), Some("b"));
    }
}
