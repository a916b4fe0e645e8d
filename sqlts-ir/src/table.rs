//! Table and column definitions.

use serde::Serialize;
use sqlts_core::ColumnType;

/// A column declared in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Zero-based ordinal within the table.
    pub position: usize,
    /// Column name, unique within its table.
    pub name: String,
    /// Declared storage type, including any qualifier (e.g. `VARCHAR(255)`).
    pub storage_type: String,
    /// Whether a NOT NULL constraint was declared.
    pub not_null: bool,
    /// Declared default expression. Carried through but not used by generation.
    pub default_value: Option<String>,
    /// 0 when not part of the primary key, otherwise the 1-based key position.
    pub primary_key_ordinal: usize,
}

impl Column {
    pub fn new(
        position: usize,
        name: impl Into<String>,
        storage_type: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            storage_type: storage_type.into(),
            not_null: false,
            default_value: None,
            primary_key_ordinal: 0,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn primary_key(mut self, ordinal: usize) -> Self {
        self.primary_key_ordinal = ordinal;
        self
    }

    /// Returns true if the column belongs to the primary key.
    pub fn is_primary_key(&self) -> bool {
        self.primary_key_ordinal > 0
    }

    /// Primary key columns never hold absent values, whatever the declared constraint.
    pub fn nullable(&self) -> bool {
        !(self.not_null || self.is_primary_key())
    }

    /// The storage class of the declared type.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::from_storage_type(&self.storage_type)
    }
}

/// A base table and its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table; columns are kept in `position` order.
    pub fn new(name: impl Into<String>, mut columns: Vec<Column>) -> Self {
        columns.sort_by_key(|c| c.position);
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Primary key columns in key order. Empty when the table has no key.
    pub fn primary_key(&self) -> Vec<&Column> {
        let mut key: Vec<&Column> = self.columns.iter().filter(|c| c.is_primary_key()).collect();
        key.sort_by_key(|c| c.primary_key_ordinal);
        key
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(Column::is_primary_key)
    }

    /// Columns that are not part of the primary key, in position order.
    pub fn non_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.is_primary_key())
    }
}

/// All tables of a schema, in catalog enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
}
