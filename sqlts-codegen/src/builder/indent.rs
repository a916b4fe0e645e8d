//! Indentation of generated code.

const SPACES: &str = "        ";

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces, at most eight wide.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Two spaces, as formatters produce for TypeScript.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Spaces(width) => &SPACES[..usize::from(width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
