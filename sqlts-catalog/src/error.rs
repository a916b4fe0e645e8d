use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(sqlts::io), help("check that the schema file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open the in-memory catalog")]
    #[diagnostic(code(sqlts::catalog_open))]
    Open {
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to load schema '{filename}'")]
    #[diagnostic(
        code(sqlts::schema_load),
        help("the schema file must contain valid SQLite DDL statements")
    )]
    Load {
        filename: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to read catalog metadata for {target}")]
    #[diagnostic(code(sqlts::catalog_query))]
    Query {
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("column positions of table '{table}' are not contiguous")]
    #[diagnostic(
        code(sqlts::column_positions),
        help("expected position {expected}, found {found}")
    )]
    ColumnPositions {
        table: String,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Create an IO error for a schema path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a load error for schema text that the catalog rejected
    pub fn load(filename: impl Into<String>, source: rusqlite::Error) -> Box<Self> {
        Box::new(Error::Load {
            filename: filename.into(),
            source,
        })
    }

    /// Create a metadata query error
    pub fn query(target: impl Into<String>, source: rusqlite::Error) -> Box<Self> {
        Box::new(Error::Query {
            target: target.into(),
            source,
        })
    }
}
