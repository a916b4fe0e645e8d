//! Core utilities and types for the sqlts generator.
//!
//! This crate provides fundamental types and utilities used across
//! the sqlts workspace: file emission, column type classification,
//! identifier casing and the `sqlts.toml` configuration.

mod config;
mod file;
mod type_mapper;
mod utils;

pub use config::{Config, TypeScriptConfig};
// File operations
pub use file::{FileRules, GeneratedFile};
// Fundamental types
pub use type_mapper::{ColumnType, TypeMapper};
// String utilities
pub use utils::{is_identifier, to_camel_case, to_type_name};
