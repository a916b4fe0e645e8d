//! Schema introspection for the sqlts generator.
//!
//! The schema text is executed against a fresh in-memory SQLite database and
//! the resulting catalog is read back into [`sqlts_ir`] tables.
//!
//! ```ignore
//! use sqlts_catalog::Catalog;
//!
//! let catalog = Catalog::open("schema.sql")?;
//! let schema = catalog.read()?;
//! for table in &schema.tables {
//!     println!("{} ({} columns)", table.name(), table.columns().len());
//! }
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod error;

pub use catalog::{Catalog, read_schema};
pub use error::{Error, Result};
