//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use indexmap::IndexMap;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating data-access code in a
/// new language.
pub trait LanguageCodegen {
    /// Render one source unit per table, keyed by table name, in catalog order
    fn render_units(&self) -> Result<IndexMap<String, String>>;

    /// Render the unit that re-exports every table unit
    fn render_manifest(&self) -> String;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, table units first and the manifest last
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
