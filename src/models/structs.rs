use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutError;
use crate::models::enums::TableKind;

/// A single field in a table's public selection. Identity is the `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, alias = "dataType")]
    pub data_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            data_type: data_type.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Display label: alias when set, otherwise the attribute name.
    pub fn label(&self) -> &str {
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias,
            _ => &self.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub kind: TableKind,
    /// The public selection, in server order.
    #[serde(default, alias = "publicSelection", alias = "public_selection")]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            kind: TableKind::Plain,
            columns,
        }
    }

    pub fn with_kind(mut self, kind: TableKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// First column name that occurs more than once in the public selection.
    pub fn duplicate_column(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .find(|c| !seen.insert(c.name.as_str()))
            .map(|c| c.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPair {
    pub left: String,
    pub right: String,
}

impl ColumnPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Column bindings for one join relationship between two named tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorGroup {
    #[serde(alias = "leftTable")]
    pub left_table: String,
    #[serde(alias = "rightTable")]
    pub right_table: String,
    #[serde(default)]
    pub pairs: Vec<ColumnPair>,
}

impl OperatorGroup {
    pub fn new(
        left_table: impl Into<String>,
        right_table: impl Into<String>,
        pairs: Vec<ColumnPair>,
    ) -> Self {
        Self {
            left_table: left_table.into(),
            right_table: right_table.into(),
            pairs,
        }
    }

    /// Single-pair group, the common case for an equi-join on one key.
    pub fn single(
        left_table: impl Into<String>,
        left_column: impl Into<String>,
        right_table: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Self::new(
            left_table,
            right_table,
            vec![ColumnPair::new(left_column, right_column)],
        )
    }
}

/// Input document: the tables of one worksheet view and their join bindings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default, alias = "operatorGroups")]
    pub operator_groups: Vec<OperatorGroup>,
}

impl LayoutInput {
    pub fn from_json(content: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the preconditions the layout core relies on but does not defend against.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(LayoutError::EmptyTableName);
            }
            if let Some(column) = table.duplicate_column() {
                return Err(LayoutError::DuplicateColumn {
                    table: table.name.clone(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Final column order for one table, as bound by the join/concatenation editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub table: String,
    pub columns: Vec<Column>,
}

impl TableLayout {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
