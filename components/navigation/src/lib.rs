//! Navigation components for `markupui`.
//!
//! - [`Breadcrumbs`] for the trail to the current screen,
//! - [`Tabs`] switching panels in place,
//! - [`Pagination`] for paged listings, built on [`page_window`],
//! - [`SearchBox`] for list-table searches.

pub mod breadcrumbs;
pub use breadcrumbs::{Breadcrumbs, Crumb};
pub mod pagination;
pub use pagination::{PageSlot, Pagination, page_url, page_window};
pub mod search;
pub use search::SearchBox;
pub mod tabs;
pub use tabs::{Tab, Tabs};

mod style;
