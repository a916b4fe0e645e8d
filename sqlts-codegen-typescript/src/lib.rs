//! TypeScript code generator for the sqlts generator.
//!
//! This crate turns a [`sqlts_ir::Schema`] into data-access modules for the
//! [Bun](https://bun.com/) runtime, using its built-in `bun:sqlite` driver.
//!
//! # Usage
//!
//! This crate is used internally by the `sqlts` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use sqlts_catalog::Catalog;
//! use sqlts_codegen_typescript::{Generator, LanguageCodegen};
//! use sqlts_core::TypeScriptConfig;
//! use std::path::Path;
//!
//! let schema = Catalog::open("schema.sql")?.read()?;
//! let generator = Generator::new(&schema, TypeScriptConfig::default());
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/db"))?;
//! ```
//!
//! # Generated Output
//!
//! - `<table>.ts` - row and input types plus `insert`, `getAll`, and for keyed
//!   tables `get`, `update` and `delete` functions
//! - `index.ts` - re-exports every table module

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod code_file;
mod error;
mod generator;
mod literal;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use error::{Error, Result};
pub use generator::Generator;
pub use literal::{property_key, string_literal};
pub use naming::TS_NAMING;
pub use sqlts_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;
