//! Table and profile models
//!
//! [`Table`] is the parsed input: named columns of non-empty answer
//! cells, in source order. [`Profile`] is the result: per source column,
//! the ranked frequency table and (optionally) the ranked hypernym table.

/// One named column of non-empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<String>,
}

impl Column {
    /// Create a column.
    pub fn new(name: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// Ordered collection of named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from columns, keeping their order.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in source order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Derived tables for one source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfiledColumn {
    /// Source column name.
    pub name: String,
    /// Non-empty cells in the source column.
    pub cell_count: usize,
    /// Ranked `(lemma, count)` pairs.
    pub frequencies: Vec<(String, u32)>,
    /// Ranked `(ancestor term, pair count)` pairs; `None` when profiling
    /// ran without a semantic graph.
    pub hypernyms: Option<Vec<(String, u32)>>,
}

impl ProfiledColumn {
    /// Output name of the derived hypernym column.
    pub fn hypernym_name(&self) -> String {
        format!("{}_hypernyms", self.name)
    }
}

/// Whole-table profiling result, columns in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub columns: Vec<ProfiledColumn>,
}
