#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod logging;

pub use config::{ConfigError, load_config};
#[doc(inline)]
pub use markupui_core::{
    AssetKind, AssetRegistry, AttrValue, Attributes, Block, Build, ClassList, Config, Element,
    Environment, EnvironmentBuilder, Error, HasAttributes, HasChildren, Keyword, Node, Parts,
    Rebuild, Render, Result, Size, User, configurable, escape, host, html, keyword,
};
pub use markupui_feedback as feedback;
pub use markupui_form as form;
pub use markupui_format as format;
pub use markupui_layout as layout;
pub use markupui_navigation as navigation;
pub use markupui_table as table;
pub use time;

pub mod prelude {
    //! The traits and components most admin screens need.
    //!
    //! ```
    //! use markupui::prelude::*;
    //!
    //! let env = Environment::new();
    //! let page = html::div()
    //!     .child(notice(&env, "success", "Settings saved."))
    //!     .child(card(&env, "Status", html::p("All systems go.")));
    //! assert!(page.render().contains("notice-success"));
    //! ```
    pub use markupui_core::{
        Block, Build, Config, Element, Environment, HasAttributes, HasChildren, Keyword, Node,
        Render, Size, html,
    };
    pub use markupui_feedback::{
        Avatar, Badge, FileSize, Notice, NoticeKind, ProgressBar, Stat, TimeAgo, UserCard, badge,
        notice, progress_bar,
    };
    pub use markupui_form::{CheckboxGroup, Field, Form, RadioGroup, Select, select};
    pub use markupui_layout::{Accordion, Card, Divider, List, Modal, card, list, modal_trigger};
    pub use markupui_navigation::{Breadcrumbs, Pagination, SearchBox, Tabs};
    pub use markupui_table::{Column, KeyValueTable, Row, Table, table};
}
