//! Core of `markupui`: the node tree, its renderer and the host environment.
//!
//! Markup is built as a tree of [`Node`]s and serialized by [`Render`]. Every
//! component keeps its options in a typed config struct implementing
//! [`Build`]; [`Rebuild`] caches the derived tree and throws it away whenever
//! the options change, so rendering the same component twice always yields
//! the same string.
//!
//! Anything the surrounding CMS provides (users, avatars, translation, CSRF
//! tokens, number formatting, the clock) comes in through the
//! [`Environment`].
//!
//! # Example
//!
//! ```rust
//! use markupui_core::{HasAttributes, HasChildren, Render, html};
//!
//! let markup = html::div()
//!     .class("wrap")
//!     .child(html::heading(1, "Settings"))
//!     .child(html::list(["General", "Writing", "Reading"]))
//!     .render();
//!
//! assert_eq!(
//!     markup,
//!     r#"<div class="wrap"><h1>Settings</h1><ul><li>General</li><li>Writing</li><li>Reading</li></ul></div>"#
//! );
//! ```

extern crate alloc;

#[macro_use]
mod macros;

pub mod assets;
pub mod attributes;
pub mod class_list;
pub mod config;
pub mod env;
pub mod error;
pub mod escape;
pub mod host;
pub mod html;
pub mod keyword;
pub mod node;
pub mod parts;
pub mod rebuild;
pub mod render;

#[doc(inline)]
pub use assets::{AssetKind, AssetRegistry};
#[doc(inline)]
pub use attributes::{AttrValue, Attributes, HasAttributes};
pub use class_list::ClassList;
pub use config::Config;
#[doc(inline)]
pub use env::{Environment, EnvironmentBuilder};
pub use error::{Error, Result};
pub use host::User;
pub use keyword::{Keyword, Size};
#[doc(inline)]
pub use node::{Element, HasChildren, Node};
pub use parts::{Block, Parts};
#[doc(inline)]
pub use rebuild::{Build, Rebuild};
pub use render::Render;

/// Re-exported for the `markupui-format` helpers used through the environment.
pub use markupui_format as format;
