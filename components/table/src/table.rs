//! Data tables with typed columns.

use markupui_core::{
    Block, Build, Element, Environment, HasAttributes, HasChildren, Keyword, Node, configurable,
    html, parts::sanitize_token,
};

use crate::style;

markupui_core::keyword! {
    /// Horizontal alignment of a column.
    pub enum Alignment: "alignment" {
        /// Start of the line.
        Left => "left",
        /// Centered.
        Center => "center",
        /// End of the line, for numbers.
        Right => "right",
    } default Left
}

/// A column: the key cells are looked up by, its header and alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Lookup key, also used in class names.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Cell alignment.
    pub align: Alignment,
}

impl Column {
    /// A left-aligned column.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: Alignment::Left,
        }
    }

    /// Sets the alignment.
    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Sets the alignment from a keyword, falling back to left.
    #[must_use]
    pub fn align_keyword(self, align: &str) -> Self {
        self.align(Alignment::parse_or_default(align))
    }
}

/// A body row: cells keyed by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, Node)>,
    class: Option<String>,
}

impl Row {
    /// An empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: Vec::new(),
            class: None,
        }
    }

    /// Sets the cell for `key`, replacing an earlier one.
    #[must_use]
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.cells.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.cells.push((key, value));
        }
        self
    }

    /// Adds a class to the `<tr>`.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The cell for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |row, (key, value)| row.cell(key, value))
    }
}

/// Configuration for [`Table`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct TableConfig {
    /// Columns, in display order.
    pub columns: Vec<Column>,
    /// Body rows.
    pub rows: Vec<Row>,
    /// Optional `<caption>`.
    pub caption: Option<String>,
    /// Zebra striping.
    pub striped: bool,
    /// Row highlight on hover.
    pub hover: bool,
    /// Shown in a single full-width cell when there are no rows.
    pub empty_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            caption: None,
            striped: true,
            hover: false,
            empty_message: "No items found.".into(),
        }
    }
}

impl Block for TableConfig {
    const NAME: &'static str = "table";
}

impl TableConfig {
    fn header(&self, column: &Column) -> Element {
        let parts = Self::parts();
        let mut th = html::element("th")
            .attr("scope", "col")
            .class(&format!("column-{}", sanitize_token(&column.key)));
        if column.align != Alignment::Left {
            th.add_class(&parts.part_variant("cell", column.align.as_str()));
        }
        th.text(column.label.as_str())
    }

    fn cell(&self, column: &Column, row: &Row) -> Element {
        let parts = Self::parts();
        let mut td = html::element("td")
            .class(&format!("column-{}", sanitize_token(&column.key)))
            .data("colname", column.label.as_str());
        if column.align != Alignment::Left {
            td.add_class(&parts.part_variant("cell", column.align.as_str()));
        }
        if let Some(value) = row.get(&column.key) {
            td.push_child(value.clone());
        }
        td
    }
}

impl Build for TableConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-table", style::TABLE);
        let parts = Self::parts();

        let mut table = html::element("table")
            .class(Self::NAME)
            .class("widefat");
        if self.striped {
            table.add_class("striped");
        }
        if self.hover {
            table.add_class(&parts.variant("hover"));
        }
        if let Some(caption) = &self.caption {
            table.push_child(html::element("caption").text(env.translate(caption)));
        }

        let head = html::element("tr").with_children(self.columns.iter().map(|c| self.header(c)));
        table.push_child(html::element("thead").child(head));

        let mut body = html::element("tbody");
        if self.rows.is_empty() {
            body.push_child(
                html::element("tr").class(&parts.part("empty")).child(
                    html::element("td")
                        .attr("colspan", self.columns.len().max(1))
                        .text(env.translate(&self.empty_message)),
                ),
            );
        }
        for row in &self.rows {
            for (key, _) in &row.cells {
                if !self.columns.iter().any(|column| column.key == *key) {
                    tracing::debug!(key = %key, "dropping cell without a column");
                }
            }
            let mut tr = html::element("tr");
            if let Some(class) = &row.class {
                tr.add_class(class);
            }
            body.push_child(tr.with_children(self.columns.iter().map(|c| self.cell(c, row))));
        }
        table.child(body).into()
    }
}

configurable!(
    /// An admin list table.
    ///
    /// Cells are matched to columns by key; missing cells render empty.
    Table,
    TableConfig
);

impl Table {
    /// A striped table with no columns.
    pub fn new(env: &Environment) -> Self {
        Self::from_config(env, TableConfig::default())
    }

    /// Appends a column.
    pub fn column(mut self, column: Column) -> Self {
        self.config_mut().columns.push(column);
        self
    }

    /// Appends a row.
    pub fn row(mut self, row: Row) -> Self {
        self.config_mut().rows.push(row);
        self
    }

    /// Appends several rows.
    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.config_mut().rows.extend(rows);
        self
    }

    /// Sets the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.config_mut().caption = Some(caption.into());
        self
    }

    /// Turns striping on or off.
    pub fn striped(mut self, striped: bool) -> Self {
        self.config_mut().striped = striped;
        self
    }

    /// Highlights rows on hover.
    pub fn hover(mut self) -> Self {
        self.config_mut().hover = true;
        self
    }

    /// Sets the text shown when there are no rows.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.config_mut().empty_message = message.into();
        self
    }
}

/// Builds a table from header labels and positional rows.
///
/// Column keys are derived from the labels; a label whose key is already
/// taken gets its position appended. A row shorter than the header
/// leaves its trailing cells empty, extra cells are dropped.
pub fn table<H, C, R>(env: &Environment, headers: H, rows: R) -> Table
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Node>,
{
    let mut columns: Vec<Column> = Vec::new();
    for (index, label) in headers.into_iter().enumerate() {
        let label: String = label.into();
        let token = sanitize_token(&label);
        let (base, mut key) = if token.is_empty() {
            ("col".to_owned(), format!("col-{index}"))
        } else {
            (token.clone(), token)
        };
        let mut suffix = index;
        while columns.iter().any(|column| column.key == key) {
            key = format!("{base}-{suffix}");
            suffix += 1;
        }
        columns.push(Column::new(key, label));
    }

    let rows: Vec<Row> = rows
        .into_iter()
        .map(|cells| {
            columns
                .iter()
                .zip(cells)
                .map(|(column, cell)| (column.key.clone(), cell))
                .collect::<Row>()
        })
        .collect();

    let mut table = Table::new(env);
    table.config_mut().columns = columns;
    table.rows(rows)
}
