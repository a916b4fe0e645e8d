//! Intermediate representation types for the sqlts generator.
//!
//! The IR is produced once per run by schema introspection and consumed,
//! read-only, by the code generators.
//!
//! # Architecture
//!
//! ```text
//! schema.sql → sqlts-catalog (introspection) → sqlts-ir (tables) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Immutable after construction
//! - Ordered: tables in catalog order, columns in declaration order

mod table;

pub use table::{Column, Schema, Table};
