//! Host collaborators.
//!
//! Everything the surrounding CMS provides is consumed through these traits
//! and injected via the [`Environment`](crate::Environment). Each trait comes
//! with a default implementation that works without a host, which is what
//! [`Environment::new`](crate::Environment::new) installs.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::Debug;

use markupui_format::Units;
use time::OffsetDateTime;

use crate::{
    attributes::HasAttributes,
    escape, html,
    node::{Element, Node},
};

/// Identifier of a user account.
pub type UserId = u64;

/// A user account as seen by the components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct User {
    /// Account identifier.
    pub id: UserId,
    /// Login name.
    pub login: String,
    /// Name shown to other users.
    pub display_name: String,
    /// Contact address, possibly empty.
    pub email: String,
    /// Role slugs, e.g. `administrator`.
    pub roles: Vec<String>,
}

impl User {
    /// Creates a user with a display name; the login defaults to the same.
    #[must_use]
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            id,
            login: display_name.clone(),
            display_name,
            email: String::new(),
            roles: Vec::new(),
        }
    }

    /// Sets the login name.
    #[must_use]
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a role slug.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Up to two uppercase initials from the display name, or `?`.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.display_name)
    }
}

/// Up to two uppercase initials from `name`, or `?` when there are none.
#[must_use]
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|ch| ch.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".into()
    } else {
        initials
    }
}

/// Turns a role slug into a readable label: `shop_manager` → `Shop Manager`.
#[must_use]
pub fn role_label(slug: &str) -> String {
    slug.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// User and role lookups.
pub trait Users: Debug {
    /// The user making the current request, if logged in.
    fn current_user(&self) -> Option<User>;

    /// Looks up a user by id.
    fn user(&self, id: UserId) -> Option<User>;
}

/// Avatar markup lookups.
pub trait Avatars: Debug {
    /// Returns avatar markup (usually an `<img>`) for a user, if the host has one.
    fn avatar(&self, user: &User, size: u32) -> Option<String>;
}

/// Context-specific escaping.
///
/// [`Render::write_html_with`](crate::Render::write_html_with) escapes every
/// text node and attribute value through these methods;
/// [`Environment::render`](crate::Environment::render) passes the host's
/// escaper. Overriding `html` or `attr` alone is enough, the `push_*`
/// variants fall back to them.
pub trait Escaper: Debug {
    /// Escapes text for an element body.
    fn html(&self, text: &str) -> String {
        escape::html(text)
    }

    /// Escapes text for an attribute value.
    fn attr(&self, text: &str) -> String {
        escape::attr(text)
    }

    /// Appends `text` to `out`, escaped for an element body.
    fn push_html(&self, out: &mut String, text: &str) {
        out.push_str(&self.html(text));
    }

    /// Appends `text` to `out`, escaped for an attribute value.
    fn push_attr(&self, out: &mut String, text: &str) {
        out.push_str(&self.attr(text));
    }

    /// Sanitizes a URL for `href`/`src`.
    fn url(&self, url: &str) -> String {
        escape::url(url)
    }
}

/// String translation.
pub trait Translator: Debug {
    /// Translates a user-facing string.
    fn translate(&self, text: &str) -> String;
}

/// Locale-aware number formatting.
pub trait NumberFormatter: Debug {
    /// Formats `value` with `decimals` fraction digits and digit grouping.
    fn format(&self, value: f64, decimals: usize) -> String;

    /// Formats a byte count.
    fn bytes(&self, bytes: u64, units: Units, precision: usize) -> String {
        markupui_format::bytes(bytes, units, precision)
    }
}

/// CSRF protection for forms.
pub trait Csrf: Debug {
    /// Returns the token for `action`.
    fn token(&self, action: &str) -> String;

    /// Emits the hidden field carrying the token for `action`.
    fn nonce_field(&self, action: &str, field_name: &str) -> Node {
        html::element("input")
            .attr("type", "hidden")
            .attr("id", field_name)
            .attr("name", field_name)
            .attr("value", self.token(action))
            .into()
    }
}

/// The current time.
pub trait Clock: Debug {
    /// Returns now.
    fn now(&self) -> OffsetDateTime;
}

/// A host without user accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUsers;

impl Users for NoUsers {
    fn current_user(&self) -> Option<User> {
        None
    }

    fn user(&self, _id: UserId) -> Option<User> {
        None
    }
}

/// A fixed set of users, useful for tests and static sites.
#[derive(Debug, Clone, Default)]
pub struct StaticUsers {
    users: Vec<User>,
    current: Option<UserId>,
}

impl StaticUsers {
    /// Creates an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            current: None,
        }
    }

    /// Adds a user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Marks a user as the one making the request.
    #[must_use]
    pub const fn logged_in_as(mut self, id: UserId) -> Self {
        self.current = Some(id);
        self
    }
}

impl Users for StaticUsers {
    fn current_user(&self) -> Option<User> {
        self.current.and_then(|id| self.user(id))
    }

    fn user(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }
}

/// A host without avatars; components render initials instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAvatars;

impl Avatars for NoAvatars {
    fn avatar(&self, _user: &User, _size: u32) -> Option<String> {
        None
    }
}

/// Builds `<img>` avatars from a URL template with `{id}` and `{size}` placeholders.
#[derive(Debug, Clone)]
pub struct AvatarTemplate(String);

impl AvatarTemplate {
    /// Creates a template such as `https://example.com/avatar/{id}?s={size}`.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }
}

impl Avatars for AvatarTemplate {
    fn avatar(&self, user: &User, size: u32) -> Option<String> {
        let src = self
            .0
            .replace("{id}", &user.id.to_string())
            .replace("{size}", &size.to_string());
        let img: Element = html::img(&escape::url(&src), &user.display_name)
            .attr("class", "avatar")
            .attr("width", size)
            .attr("height", size)
            .attr("loading", "lazy");
        Some(crate::render::Render::render(&img))
    }
}

/// The standard escaping rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEscaper;

impl Escaper for StandardEscaper {
    fn push_html(&self, out: &mut String, text: &str) {
        escape::push_html(out, text);
    }

    fn push_attr(&self, out: &mut String, text: &str) {
        escape::push_attr(out, text);
    }
}

/// Returns strings unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate(&self, text: &str) -> String {
        text.into()
    }
}

/// Formats numbers with `,` grouping and `.` decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNumbers;

impl NumberFormatter for PlainNumbers {
    fn format(&self, value: f64, decimals: usize) -> String {
        markupui_format::format_number(value, decimals, ",", ".")
    }
}

/// A host without CSRF tokens: fields are emitted with an empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCsrf;

impl Csrf for NoCsrf {
    fn token(&self, _action: &str) -> String {
        String::new()
    }
}

/// The system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
