/// Declares a keyword enum: a closed set of options spelled as strings.
///
/// The generated enum gets `as_str`, `ALL`, `Default`, `Display`, a strict
/// `FromStr` (case-insensitive, trimmed) and a [`Keyword`](crate::Keyword)
/// implementation.
///
/// # Usage
///
/// ```ignore
/// keyword! {
///     /// Form submission method.
///     pub enum Method: "method" {
///         /// `GET`
///         Get => "get",
///         /// `POST`
///         Post => "post",
///     } default Post
/// }
/// ```
#[macro_export]
macro_rules! keyword {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The keyword as written in markup and configuration.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
                let trimmed = value.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::Error::UnknownKeyword {
                    kind: $kind,
                    value: value.into(),
                })
            }
        }

        impl $crate::Keyword for $name {
            const KIND: &'static str = $kind;
        }
    };
}

/// Creates a configurable component backed by [`Rebuild`](crate::Rebuild).
///
/// This macro generates a wrapper struct around a configuration type that
/// implements [`Build`](crate::Build). The wrapper caches the built tree,
/// invalidates it whenever the configuration or the extra attributes change,
/// and implements [`Render`](crate::Render),
/// [`HasAttributes`](crate::HasAttributes) and `Into<Node>`.
///
/// As on [`Rebuild`](crate::Rebuild), `HasAttributes` sees only the extra
/// attributes, so queries like `has_class` ignore classes the build adds.
///
/// Setters are written by hand next to the invocation and go through
/// `config_mut()` so the cache is always invalidated.
///
/// # Usage
///
/// ```ignore
/// configurable!(
///     /// A status badge.
///     Badge,
///     BadgeConfig
/// );
///
/// impl Badge {
///     pub fn status(mut self, status: &str) -> Self {
///         self.config_mut().status = status.into();
///         self
///     }
/// }
/// ```
#[macro_export]
macro_rules! configurable {
    ($(#[$meta:meta])* $view:ident, $config:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        #[must_use]
        pub struct $view($crate::Rebuild<$config>);

        impl $view {
            /// Wraps a configuration, bound to `env`.
            pub fn from_config(env: &$crate::Environment, config: $config) -> Self {
                Self($crate::Rebuild::new(env, config))
            }

            /// The current configuration.
            #[must_use]
            pub const fn config(&self) -> &$config {
                self.0.config()
            }

            /// Mutable access to the configuration. Invalidates the cached tree.
            pub fn config_mut(&mut self) -> &mut $config {
                self.0.config_mut()
            }

            /// Returns the configuration, discarding the cache.
            #[must_use]
            pub fn into_config(self) -> $config {
                self.0.into_config()
            }

            /// Whether the next render has to rebuild the tree.
            #[must_use]
            pub fn is_dirty(&self) -> bool {
                self.0.is_dirty()
            }
        }

        impl $crate::Render for $view {
            fn write_html_with(
                &self,
                escaper: &dyn $crate::host::Escaper,
                out: &mut ::std::string::String,
            ) {
                $crate::Render::write_html_with(&self.0, escaper, out);
            }
        }

        impl $crate::HasAttributes for $view {
            fn attributes(&self) -> &$crate::Attributes {
                $crate::HasAttributes::attributes(&self.0)
            }

            fn attributes_mut(&mut self) -> &mut $crate::Attributes {
                $crate::HasAttributes::attributes_mut(&mut self.0)
            }
        }

        impl ::core::convert::From<$view> for $crate::Node {
            fn from(value: $view) -> Self {
                value.0.into_node()
            }
        }

        impl ::core::fmt::Display for $view {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::Render::render(self))
            }
        }
    };
}
