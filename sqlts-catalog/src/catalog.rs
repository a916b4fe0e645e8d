//! In-memory SQLite catalog.

use std::path::Path;

use rusqlite::Connection;
use sqlts_ir::{Column, Schema, Table};
use tracing::debug;

use crate::{Error, Result};

/// Base tables in creation order, without SQLite's internal tables.
const TABLES_SQL: &str = "SELECT name FROM sqlite_master \
     WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
     ORDER BY rowid";

const COLUMNS_SQL: &str = "SELECT cid, name, type, \"notnull\", dflt_value, pk \
     FROM pragma_table_info(?1) ORDER BY cid";

/// A schema loaded into a private in-memory database.
///
/// The connection lives exactly as long as the catalog; dropping the catalog
/// releases it.
#[derive(Debug)]
pub struct Catalog {
    connection: Connection,
}

impl Catalog {
    /// Load schema text into a fresh catalog.
    pub fn load(schema: &str) -> Result<Self> {
        Self::load_with_filename(schema, "<schema>")
    }

    /// Load schema text, naming its origin in errors.
    pub fn load_with_filename(schema: &str, filename: &str) -> Result<Self> {
        let connection =
            Connection::open_in_memory().map_err(|source| Box::new(Error::Open { source }))?;
        connection
            .execute_batch(schema)
            .map_err(|source| Error::load(filename, source))?;

        debug!(filename, "schema loaded into catalog");
        Ok(Self { connection })
    }

    /// Read a schema file and load it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::load_with_filename(&content, &path.display().to_string())
    }

    /// Names of all base tables in catalog enumeration order.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let target = "table list";
        let mut stmt = self
            .connection
            .prepare(TABLES_SQL)
            .map_err(|e| Error::query(target, e))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| Error::query(target, e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::query(target, e))
    }

    /// Read the column metadata of one table.
    pub fn read_table(&self, name: &str) -> Result<Table> {
        let target = format!("table '{}'", name);
        let mut stmt = self
            .connection
            .prepare(COLUMNS_SQL)
            .map_err(|e| Error::query(&target, e))?;
        let rows = stmt
            .query_map([name], |row| {
                let position: i64 = row.get(0)?;
                let column_name: String = row.get(1)?;
                let storage_type: String = row.get(2)?;
                let not_null: bool = row.get(3)?;
                let default_value: Option<String> = row.get(4)?;
                let primary_key_ordinal: i64 = row.get(5)?;

                Ok(Column {
                    position: position as usize,
                    name: column_name,
                    storage_type,
                    not_null,
                    default_value,
                    primary_key_ordinal: primary_key_ordinal as usize,
                })
            })
            .map_err(|e| Error::query(&target, e))?;
        let columns = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::query(&target, e))?;

        for (expected, column) in columns.iter().enumerate() {
            if column.position != expected {
                return Err(Box::new(Error::ColumnPositions {
                    table: name.to_string(),
                    expected,
                    found: column.position,
                }));
            }
        }

        let table = Table::new(name, columns);
        debug!(
            table = table.name(),
            columns = table.columns().len(),
            primary_key = table.primary_key().len(),
            "read table"
        );
        Ok(table)
    }

    /// Read every base table into the IR.
    pub fn read(&self) -> Result<Schema> {
        let tables = self
            .table_names()?
            .iter()
            .map(|name| self.read_table(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Schema::new(tables))
    }
}

/// Load schema text into a throwaway catalog and read it.
pub fn read_schema(schema: &str) -> Result<Schema> {
    Catalog::load(schema)?.read()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schema() {
        let schema = read_schema("").unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_table_names_in_creation_order() {
        let catalog = Catalog::load(
            "CREATE TABLE zebra (a TEXT);
             CREATE TABLE apple (b TEXT);
             CREATE TABLE mango (c TEXT);",
        )
        .unwrap();
        assert_eq!(catalog.table_names().unwrap(), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_internal_tables_are_excluded() {
        let catalog =
            Catalog::load("CREATE TABLE counters (id INTEGER PRIMARY KEY AUTOINCREMENT);")
                .unwrap();
        // AUTOINCREMENT creates sqlite_sequence
        assert_eq!(catalog.table_names().unwrap(), ["counters"]);
    }

    #[test]
    fn test_read_missing_table_has_no_columns() {
        let catalog = Catalog::load("").unwrap();
        let table = catalog.read_table("nope").unwrap();
        assert!(table.columns().is_empty());
    }
}
