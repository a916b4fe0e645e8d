//! TypeScript re-export statements.

use sqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::string_literal;

/// `export * from "<module>";`
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
}

impl Export {
    pub fn from(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
        }
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "export * from {};",
            string_literal(&self.from)
        ))]
    }
}
