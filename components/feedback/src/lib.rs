//! Status and value display components for `markupui`.
//!
//! - [`Badge`] labels a status with an icon,
//! - [`Notice`] shows an admin message box,
//! - [`ProgressBar`] fills to a fraction,
//! - [`Avatar`] and [`UserCard`] show users from the host,
//! - [`TimeAgo`], [`FileSize`] and [`Stat`] format values for people.
//!
//! ```
//! use markupui_core::{Environment, Render};
//! use markupui_feedback::badge;
//!
//! let env = Environment::new();
//! let html = badge(&env, "Draft", "draft").render();
//! assert!(html.contains("badge--draft"));
//! ```

pub mod avatar;
pub use avatar::{Avatar, UserCard};
pub mod badge;
pub use badge::{Badge, badge};
pub mod file_size;
pub use file_size::FileSize;
pub mod notice;
pub use notice::{Notice, NoticeKind, notice};
pub mod progress;
pub use progress::{ProgressBar, progress_bar};
pub mod stat;
pub use stat::Stat;
pub mod time_ago;
pub use time_ago::TimeAgo;

mod style;
