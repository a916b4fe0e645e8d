//! TypeScript function builder.

use sqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    exported: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a structured fragment (block, indented continuation) to the body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}function {}({}): {} {{",
                export, self.name, params_str, ret
            ),
            None => format!("{}function {}({}) {{", export, self.name, params_str),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        fragments.push(CodeFragment::block(
            self.format_signature(),
            self.body.clone(),
            "}",
        ));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("greet").build();
        assert_eq!(f, "export function greet() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("add")
            .param(Param::new("a", "number"))
            .param(Param::new("b", "number"))
            .returns("number")
            .body_line("return a + b;")
            .build();
        assert_eq!(
            f,
            "export function add(a: number, b: number): number {\n  return a + b;\n}\n"
        );
    }

    #[test]
    fn test_private_fn() {
        let f = Fn::new("helper").private().build();
        assert!(f.starts_with("function helper() {"));
        assert!(!f.contains("export"));
    }

    #[test]
    fn test_fn_with_doc() {
        let f = Fn::new("run").doc("Execute the statement").build();
        assert!(f.starts_with("/** Execute the statement */\n"));
    }

    #[test]
    fn test_fn_with_nested_block() {
        let f = Fn::new("first")
            .param(Param::new("xs", "number[]"))
            .returns("number | null")
            .body_fragment(CodeFragment::block(
                "if (xs.length === 0) {",
                vec![CodeFragment::line("return null;")],
                "}",
            ))
            .body_line("return xs[0];")
            .build();
        assert_eq!(
            f,
            "export function first(xs: number[]): number | null {\n  if (xs.length === 0) {\n    return null;\n  }\n  return xs[0];\n}\n"
        );
    }
}
