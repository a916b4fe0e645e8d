//! `<table>.ts` data-access module generator.

use std::path::{Path, PathBuf};

use sqlts_codegen::{
    CodeFragment,
    sql::{self, InsertTemplate, Segment, UpdateTemplate},
};
use sqlts_core::{FileRules, GeneratedFile, TypeMapper, TypeScriptConfig};
use sqlts_ir::{Column, Table};

use crate::{
    TS_NAMING, TypeScriptTypeMapper,
    ast::{Const, Field, Fn, Import, ObjectType, Param},
    code_file::CodeFile,
    property_key, string_literal,
};

/// Comment placed at the top of every generated module.
pub const GENERATED_HEADER: &str = "// Code generated by sqlts. DO NOT EDIT.";

const BINDINGS: &str = "SQLQueryBindings";

const QUOTE_FN: &str = "quoteIdent";

/// The data-access module of one table.
///
/// Every module declares the row type, the input type and the column list,
/// then `insert<T>` and `getAll<T>`. Tables with a primary key also get
/// `get<T>`, `update<T>` and `delete<T>`, parameterized by the key columns in
/// key order.
pub struct TableTs<'a> {
    table: &'a Table,
    config: &'a TypeScriptConfig,
    type_name: String,
    value_name: String,
}

impl<'a> TableTs<'a> {
    pub fn new(table: &'a Table, config: &'a TypeScriptConfig) -> Self {
        Self {
            table,
            config,
            type_name: TS_NAMING.type_name(table.name()),
            value_name: TS_NAMING.value_name(table.name()),
        }
    }

    /// Type name of the row type; every other exported name derives from it.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// File name relative to the output directory.
    pub fn file_name(&self) -> String {
        super::unit_file_name(self.table.name())
    }

    /// Names this module exports, in declaration order.
    pub fn exported_names(&self) -> Vec<String> {
        let ty = &self.type_name;
        let mut names = vec![
            ty.clone(),
            self.input_type_name(),
            format!("insert{}", ty),
            format!("getAll{}", ty),
        ];
        if self.table.has_primary_key() {
            names.push(format!("get{}", ty));
            names.push(format!("update{}", ty));
            names.push(format!("delete{}", ty));
        }
        names
    }

    /// Key column names paired with their parameter names, in key order.
    pub fn key_parameters(&self) -> Vec<(String, String)> {
        self.table
            .primary_key()
            .into_iter()
            .map(|column| (column.name.clone(), TS_NAMING.param_name(&column.name)))
            .collect()
    }

    /// Name of the `update<T>` input parameter.
    ///
    /// A table made only of key columns never reads its input, so the
    /// parameter is marked unused.
    pub fn input_param_name(&self) -> &'static str {
        if self.table.non_key_columns().next().is_none() {
            "_input"
        } else {
            "input"
        }
    }

    /// Every module-level value name, exported or not.
    pub fn module_names(&self) -> Vec<String> {
        let mut names = self.exported_names();
        names.push(self.columns_const_name());
        if self.updatable_const().is_some() {
            names.push(self.updatable_const_name());
        }
        names.push(QUOTE_FN.to_string());
        names
    }

    fn input_type_name(&self) -> String {
        format!("{}Input", self.type_name)
    }

    fn columns_const_name(&self) -> String {
        format!("{}Columns", self.value_name)
    }

    fn updatable_const_name(&self) -> String {
        format!("{}UpdatableColumns", self.value_name)
    }

    fn field_type(column: &Column) -> String {
        let mapper = TypeScriptTypeMapper;
        if column.nullable() {
            mapper.map_nullable_type(column.column_type())
        } else {
            mapper.map_column_type(column.column_type()).to_string()
        }
    }

    fn key_params(&self) -> Vec<Param> {
        let mapper = TypeScriptTypeMapper;
        self.table
            .primary_key()
            .into_iter()
            .map(|column| {
                Param::new(
                    TS_NAMING.param_name(&column.name),
                    mapper.map_column_type(column.column_type()),
                )
            })
            .collect()
    }

    /// Key parameters as statement arguments, in key order.
    ///
    /// `unknown` parameters are asserted to the binding type.
    fn key_args(&self) -> Vec<String> {
        let mapper = TypeScriptTypeMapper;
        self.table
            .primary_key()
            .into_iter()
            .map(|column| {
                let name = TS_NAMING.param_name(&column.name);
                if mapper.map_column_type(column.column_type()) == "unknown" {
                    format!("{} as {}", name, BINDINGS)
                } else {
                    name
                }
            })
            .collect()
    }

    fn key_names(&self) -> Vec<String> {
        self.table
            .primary_key()
            .into_iter()
            .map(|column| column.name.clone())
            .collect()
    }

    fn row_type(&self) -> ObjectType {
        ObjectType::new(&self.type_name).fields(
            self.table
                .columns()
                .iter()
                .map(|column| Field::new(property_key(&column.name), Self::field_type(column))),
        )
    }

    fn input_type(&self) -> ObjectType {
        ObjectType::new(self.input_type_name()).fields(self.table.columns().iter().map(|column| {
            Field::new(property_key(&column.name), Self::field_type(column)).optional()
        }))
    }

    fn column_list<'c>(columns: impl Iterator<Item = &'c Column>) -> String {
        let names = columns
            .map(|column| string_literal(&column.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}] as const", names)
    }

    fn columns_const(&self) -> Const {
        Const::new(
            self.columns_const_name(),
            Self::column_list(self.table.columns().iter()),
        )
        .private()
    }

    /// Non-key columns an update may set. `None` for tables without a key or
    /// without any non-key column.
    fn updatable_const(&self) -> Option<Const> {
        if !self.table.has_primary_key() || self.table.non_key_columns().next().is_none() {
            return None;
        }
        Some(
            Const::new(
                self.updatable_const_name(),
                Self::column_list(self.table.non_key_columns()),
            )
            .private(),
        )
    }

    fn quote_fn() -> Fn {
        Fn::new(QUOTE_FN)
            .private()
            .param(Param::new("identifier", "string"))
            .returns("string")
            .body_line("return `\"${identifier.replaceAll('\"', '\"\"')}\"`;")
    }

    /// `const sql = ...;` joining the segments at call time over `columns`.
    fn sql_from_segments(segments: &[Segment]) -> Vec<CodeFragment> {
        let separator = string_literal(sql::SEPARATOR);
        let parts: Vec<String> = segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => string_literal(text),
                Segment::Columns => format!("columns.map({}).join({})", QUOTE_FN, separator),
                Segment::Placeholders => format!(
                    "columns.map(() => {}).join({})",
                    string_literal(sql::PLACEHOLDER),
                    separator
                ),
                Segment::Assignments => format!(
                    "columns.map((column) => `${{{}(column)}}{}`).join({})",
                    QUOTE_FN,
                    sql::ASSIGNMENT,
                    separator
                ),
            })
            .collect();

        let last = parts.len().saturating_sub(1);
        let lines = parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                let end = if i == last { ";" } else { " +" };
                CodeFragment::line(format!("{}{}", part, end))
            })
            .collect();
        vec![CodeFragment::line("const sql ="), CodeFragment::indent(lines)]
    }

    fn insert_fn(&self) -> Fn {
        let ty = &self.type_name;
        let template = InsertTemplate::new(self.table.name());

        Fn::new(format!("insert{}", ty))
            .doc("Insert a row. Fields left undefined take their column defaults.")
            .param(Param::new("input", self.input_type_name()))
            .returns(ty)
            .body_line(format!(
                "const columns = {}.filter((column) => input[column] !== undefined);",
                self.columns_const_name()
            ))
            .body_fragment(CodeFragment::block(
                "if (columns.length === 0) {",
                vec![CodeFragment::line(format!(
                    "return db.query<{ty}, []>({}).get() as {ty};",
                    string_literal(&template.default_values)
                ))],
                "}",
            ))
            .body_fragments(Self::sql_from_segments(template.segments()))
            .body_line(format!(
                "const values = columns.map((column) => input[column]) as {}[];",
                BINDINGS
            ))
            .body_line(format!(
                "return db.query<{ty}, {BINDINGS}[]>(sql).get(...values) as {ty};"
            ))
    }

    fn get_all_fn(&self) -> Fn {
        let ty = &self.type_name;
        let statement = sql::select_all(self.table.name());

        Fn::new(format!("getAll{}", ty))
            .doc("Fetch every row, in no particular order.")
            .returns(format!("{}[]", ty))
            .body_line(format!(
                "return db.query<{ty}, []>({}).all();",
                string_literal(statement.sql())
            ))
    }

    fn get_fn(&self) -> Fn {
        let ty = &self.type_name;
        let statement = sql::select_by_key(self.table.name(), &self.key_names());

        Fn::new(format!("get{}", ty))
            .doc("Fetch the row with the given key, or null when there is none.")
            .params(self.key_params())
            .returns(format!("{} | null", ty))
            .body_line(format!(
                "return db.query<{ty}, {BINDINGS}[]>({}).get({});",
                string_literal(statement.sql()),
                self.key_args().join(", ")
            ))
    }

    fn update_fn(&self) -> Fn {
        let ty = &self.type_name;
        let key_params = self.key_params();
        let key_call = key_params
            .iter()
            .map(|p| p.name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        let f = Fn::new(format!("update{}", ty))
            .doc("Set the defined fields of `input` on the row with the given key. Returns the updated row, or null when there is none.")
            .params(key_params)
            .returns(format!("{} | null", ty));

        let f = f.param(Param::new(self.input_param_name(), self.input_type_name()));

        // Only key columns: nothing can ever be set
        if self.table.non_key_columns().next().is_none() {
            return f.body_line(format!("return get{}({});", ty, key_call));
        }

        let template = UpdateTemplate::new(self.table.name(), &self.key_names());
        f
            .body_line(format!(
                "const columns = {}.filter((column) => input[column] !== undefined);",
                self.updatable_const_name()
            ))
            .body_fragment(CodeFragment::block(
                "if (columns.length === 0) {",
                vec![CodeFragment::line(format!(
                    "return get{}({});",
                    ty, key_call
                ))],
                "}",
            ))
            .body_fragments(Self::sql_from_segments(template.segments()))
            .body_line(format!(
                "const values = columns.map((column) => input[column]) as {}[];",
                BINDINGS
            ))
            .body_line(format!(
                "return db.query<{ty}, {BINDINGS}[]>(sql).get(...values, {});",
                self.key_args().join(", ")
            ))
    }

    fn delete_fn(&self) -> Fn {
        let ty = &self.type_name;
        let statement = sql::delete_by_key(self.table.name(), &self.key_names());

        Fn::new(format!("delete{}", ty))
            .doc("Delete the row with the given key. Deleting a missing key is not an error.")
            .params(self.key_params())
            .returns("void")
            .body_line(format!(
                "db.query<unknown, {BINDINGS}[]>({}).run({});",
                string_literal(statement.sql()),
                self.key_args().join(", ")
            ))
    }
}

impl GeneratedFile for TableTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        if self.config.header {
            FileRules::with_header(GENERATED_HEADER)
        } else {
            FileRules::default()
        }
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new()
            .import(Import::new("bun:sqlite").named(BINDINGS).type_only())
            .import(Import::new(&self.config.database_import).named("db"))
            .add(self.row_type())
            .add(self.input_type())
            .add(self.columns_const());

        if let Some(updatable) = self.updatable_const() {
            file = file.add(updatable);
        }

        file = file
            .add(Self::quote_fn())
            .add(self.insert_fn())
            .add(self.get_all_fn());

        if self.table.has_primary_key() {
            file = file
                .add(self.get_fn())
                .add(self.update_fn())
                .add(self.delete_fn());
        }

        file.render()
    }
}
