use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body
    fn render(&self) -> String;

    /// Render the full file content, including the header from the rules
    fn contents(&self) -> String {
        self.rules().apply(self.render())
    }

    /// Write the file to disk, replacing whatever is already there
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.contents())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Rules that determine how a file is rendered to disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRules {
    /// Comment placed at the top of the file, followed by a blank line
    pub header: Option<String>,
}

impl FileRules {
    /// Rules for a file carrying the given header comment.
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
        }
    }

    /// Apply the rules to a rendered body.
    pub fn apply(&self, body: String) -> String {
        match &self.header {
            Some(header) if body.is_empty() => format!("{}\n", header),
            Some(header) => format!("{}\n\n{}", header, body),
            None => body,
        }
    }
}
