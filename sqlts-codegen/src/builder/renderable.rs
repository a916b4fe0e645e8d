//! Code fragments and the trait that produces them.
//!
//! AST nodes describe themselves as fragments; only [`CodeBuilder`] turns
//! fragments into text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line.
    Line(String),
    /// A header line, an indented body and a closing line (`{ ... }`).
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// Fragments one level deeper than their surroundings.
    Indent(Vec<CodeFragment>),
    /// A one-line `/** ... */` comment.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }
}

/// Types that render to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
