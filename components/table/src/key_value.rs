//! Two-column label/value tables.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// Configuration for [`KeyValueTable`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct KeyValueConfig {
    /// `(label, value)` rows, in order.
    pub rows: Vec<(String, Node)>,
}

impl Block for KeyValueConfig {
    const NAME: &'static str = "key-value-table";
}

impl Build for KeyValueConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-key-value-table", style::KEY_VALUE);

        let body = html::element("tbody").with_children(self.rows.iter().map(|(label, value)| {
            html::element("tr")
                .child(html::element("th").attr("scope", "row").text(env.translate(label)))
                .child(html::element("td").child(value.clone()))
        }));
        html::element("table")
            .class(Self::NAME)
            .class("form-table")
            .attr("role", "presentation")
            .child(body)
            .into()
    }
}

configurable!(
    /// Label/value rows, e.g. for a details screen.
    KeyValueTable,
    KeyValueConfig
);

impl KeyValueTable {
    /// An empty table.
    pub fn new(env: &Environment) -> Self {
        Self::from_config(env, KeyValueConfig::default())
    }

    /// Appends a row.
    pub fn row(mut self, label: impl Into<String>, value: impl Into<Node>) -> Self {
        self.config_mut().rows.push((label.into(), value.into()));
        self
    }
}

/// Creates a table from `(label, value)` pairs.
pub fn key_value_table<L, V>(env: &Environment, rows: impl IntoIterator<Item = (L, V)>) -> KeyValueTable
where
    L: Into<String>,
    V: Into<Node>,
{
    rows.into_iter()
        .fold(KeyValueTable::new(env), |table, (label, value)| table.row(label, value))
}
