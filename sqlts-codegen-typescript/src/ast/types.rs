//! TypeScript object type builder.

use sqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Property key as written, already quoted when needed.
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// An exported object type alias (`export type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .map(|field| {
                let optional = if field.optional { "?" } else { "" };
                CodeFragment::line(format!("{}{}: {};", field.name, optional, field.ty))
            })
            .collect()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("export type {} = {{}};", self.name))];
        }
        vec![CodeFragment::block(
            format!("export type {} = {{", self.name),
            self.fields_to_fragments(),
            "};",
        )]
    }
}
