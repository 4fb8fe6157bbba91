//! The rendering environment.
//!
//! An [`Environment`] bundles the host collaborators, the asset registry and
//! the site [`Config`]. Components capture a clone when they are created and
//! consult it while building; cloning only bumps reference counts.

use alloc::{rc::Rc, string::String};
use core::fmt::{self, Debug};

use markupui_format::Units;
use time::OffsetDateTime;

use crate::{
    assets::AssetRegistry,
    config::Config,
    host::{
        Avatars, Clock, Csrf, Escaper, NoAvatars, NoCsrf, NoUsers, NumberFormatter, PlainNumbers,
        StandardEscaper, SystemClock, Translator, Untranslated, User, Users,
    },
    node::Node,
    render::Render,
};

/// Host services and settings shared by every component of one request.
#[derive(Clone)]
pub struct Environment {
    users: Rc<dyn Users>,
    avatars: Rc<dyn Avatars>,
    escaper: Rc<dyn Escaper>,
    translator: Rc<dyn Translator>,
    numbers: Rc<dyn NumberFormatter>,
    csrf: Rc<dyn Csrf>,
    clock: Rc<dyn Clock>,
    assets: AssetRegistry,
    config: Rc<Config>,
}

impl Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("users", &self.users)
            .field("avatars", &self.avatars)
            .field("translator", &self.translator)
            .field("csrf", &self.csrf)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// An environment with the default collaborators and [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring an environment.
    #[must_use]
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// A builder seeded with this environment's collaborators, for deriving a
    /// variant (e.g. a different config) that shares the asset registry.
    #[must_use]
    pub fn to_builder(&self) -> EnvironmentBuilder {
        EnvironmentBuilder {
            users: Some(self.users.clone()),
            avatars: Some(self.avatars.clone()),
            escaper: Some(self.escaper.clone()),
            translator: Some(self.translator.clone()),
            numbers: Some(self.numbers.clone()),
            csrf: Some(self.csrf.clone()),
            clock: Some(self.clock.clone()),
            assets: Some(self.assets.clone()),
            config: (*self.config).clone(),
        }
    }

    /// User lookups.
    #[must_use]
    pub fn users(&self) -> &dyn Users {
        &*self.users
    }

    /// Avatar lookups.
    #[must_use]
    pub fn avatars(&self) -> &dyn Avatars {
        &*self.avatars
    }

    /// Escaping policy.
    #[must_use]
    pub fn escaper(&self) -> &dyn Escaper {
        &*self.escaper
    }

    /// Translation.
    #[must_use]
    pub fn translator(&self) -> &dyn Translator {
        &*self.translator
    }

    /// Number formatting.
    #[must_use]
    pub fn numbers(&self) -> &dyn NumberFormatter {
        &*self.numbers
    }

    /// CSRF tokens.
    #[must_use]
    pub fn csrf(&self) -> &dyn Csrf {
        &*self.csrf
    }

    /// The clock.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    /// The per-request asset registry.
    #[must_use]
    pub const fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    /// Site settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translates a user-facing string.
    #[must_use]
    pub fn translate(&self, text: &str) -> String {
        self.translator.translate(text)
    }

    /// Renders `item` with the host's escaper.
    #[must_use]
    pub fn render(&self, item: &(impl Render + ?Sized)) -> String {
        item.render_with(&*self.escaper)
    }

    /// Sanitizes a URL through the escaper.
    #[must_use]
    pub fn url(&self, url: &str) -> String {
        self.escaper.url(url)
    }

    /// The current time.
    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Formats a number with the configured formatter.
    #[must_use]
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        self.numbers.format(value, decimals)
    }

    /// Formats a byte count using the configured units and precision.
    #[must_use]
    pub fn format_bytes(&self, bytes: u64) -> String {
        let units = if self.config.binary_units {
            Units::Binary
        } else {
            Units::Decimal
        };
        self.numbers.bytes(bytes, units, self.config.precision)
    }

    /// The user making the current request.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.users.current_user()
    }

    /// Hidden CSRF field for `action`.
    #[must_use]
    pub fn nonce_field(&self, action: &str, field_name: &str) -> Node {
        self.csrf.nonce_field(action, field_name)
    }

    /// Queues a stylesheet unless assets are disabled in the config.
    pub fn enqueue_style(&self, handle: &'static str, css: &'static str) {
        if self.config.enqueue_assets {
            self.assets.enqueue_style(handle, css);
        }
    }

    /// Queues a script unless assets are disabled in the config.
    pub fn enqueue_script(&self, handle: &'static str, js: &'static str) {
        if self.config.enqueue_assets {
            self.assets.enqueue_script(handle, js);
        }
    }
}

/// Builder for [`Environment`]. Unset collaborators use the defaults.
#[derive(Default)]
#[must_use]
pub struct EnvironmentBuilder {
    users: Option<Rc<dyn Users>>,
    avatars: Option<Rc<dyn Avatars>>,
    escaper: Option<Rc<dyn Escaper>>,
    translator: Option<Rc<dyn Translator>>,
    numbers: Option<Rc<dyn NumberFormatter>>,
    csrf: Option<Rc<dyn Csrf>>,
    clock: Option<Rc<dyn Clock>>,
    assets: Option<AssetRegistry>,
    config: Config,
}

impl Debug for EnvironmentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EnvironmentBuilder {
    /// Installs the user directory.
    pub fn users(mut self, users: impl Users + 'static) -> Self {
        self.users = Some(Rc::new(users));
        self
    }

    /// Installs the avatar provider.
    pub fn avatars(mut self, avatars: impl Avatars + 'static) -> Self {
        self.avatars = Some(Rc::new(avatars));
        self
    }

    /// Installs the escaper.
    pub fn escaper(mut self, escaper: impl Escaper + 'static) -> Self {
        self.escaper = Some(Rc::new(escaper));
        self
    }

    /// Installs the translator.
    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Rc::new(translator));
        self
    }

    /// Installs the number formatter.
    pub fn numbers(mut self, numbers: impl NumberFormatter + 'static) -> Self {
        self.numbers = Some(Rc::new(numbers));
        self
    }

    /// Installs the CSRF provider.
    pub fn csrf(mut self, csrf: impl Csrf + 'static) -> Self {
        self.csrf = Some(Rc::new(csrf));
        self
    }

    /// Installs the clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Rc::new(clock));
        self
    }

    /// Shares an existing asset registry.
    pub fn assets(mut self, assets: AssetRegistry) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Replaces the site settings.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Finishes the environment.
    #[must_use]
    pub fn build(self) -> Environment {
        Environment {
            users: self.users.unwrap_or_else(|| Rc::new(NoUsers)),
            avatars: self.avatars.unwrap_or_else(|| Rc::new(NoAvatars)),
            escaper: self.escaper.unwrap_or_else(|| Rc::new(StandardEscaper)),
            translator: self.translator.unwrap_or_else(|| Rc::new(Untranslated)),
            numbers: self.numbers.unwrap_or_else(|| Rc::new(PlainNumbers)),
            csrf: self.csrf.unwrap_or_else(|| Rc::new(NoCsrf)),
            clock: self.clock.unwrap_or_else(|| Rc::new(SystemClock)),
            assets: self.assets.unwrap_or_default(),
            config: Rc::new(self.config),
        }
    }
}
