//! Table components for `markupui`.
//!
//! [`Table`] renders an admin list table from typed [`Column`]s and keyed
//! [`Row`]s; [`table()`] is the positional shortcut. [`KeyValueTable`] lays
//! out label/value pairs, as on settings and detail screens.

pub mod key_value;
pub use key_value::{KeyValueTable, key_value_table};
pub mod table;
pub use table::{Alignment, Column, Row, Table, table};

mod style;
