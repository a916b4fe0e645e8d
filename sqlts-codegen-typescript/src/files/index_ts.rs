//! index.ts manifest generator.

use std::path::{Path, PathBuf};

use sqlts_core::{FileRules, GeneratedFile};
use sqlts_ir::Table;

use crate::{
    ast::Export,
    code_file::CodeFile,
    files::{GENERATED_HEADER, unit_file_name},
};

/// File name of the manifest module.
pub const MANIFEST_FILE: &str = "index.ts";

/// The index.ts module re-exporting every table module.
pub struct IndexTs<'a> {
    tables: &'a [Table],
    header: bool,
}

impl<'a> IndexTs<'a> {
    pub fn new(tables: &'a [Table], header: bool) -> Self {
        Self { tables, header }
    }
}

impl GeneratedFile for IndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        if self.header {
            FileRules::with_header(GENERATED_HEADER)
        } else {
            FileRules::default()
        }
    }

    fn render(&self) -> String {
        CodeFile::new()
            .exports(
                self.tables
                    .iter()
                    .map(|table| Export::from(format!("./{}", unit_file_name(table.name())))),
            )
            .render()
    }
}
