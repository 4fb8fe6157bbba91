//! Layout components for `markupui`.
//!
//! - [`Card`] boxes content under a title,
//! - [`Modal`] renders a dialog opened by [`modal_trigger`],
//! - [`List`] renders bulleted or numbered items with optional icons,
//! - [`Accordion`] stacks collapsible sections,
//! - [`Divider`] separates content, optionally with a label.

pub mod accordion;
pub use accordion::Accordion;
pub mod card;
pub use card::{Card, card};
pub mod divider;
pub use divider::Divider;
pub mod list;
pub use list::{List, ListItem, list};
pub mod modal;
pub use modal::{Modal, modal_trigger};

mod style;
