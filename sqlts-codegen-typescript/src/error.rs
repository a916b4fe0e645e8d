use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator checks (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("tables '{first}' and '{second}' both export '{name}'")]
    #[diagnostic(
        code(sqlts::name_collision),
        help("rename one of the tables; generated modules are re-exported together from index.ts")
    )]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("table '{table}' does not map to a usable type name (got '{type_name}')")]
    #[diagnostic(
        code(sqlts::invalid_type_name),
        help("table names must start with a letter and contain only letters, digits and underscores")
    )]
    InvalidTypeName { table: String, type_name: String },

    #[error("table '{table}' would be written over the '{manifest}' manifest")]
    #[diagnostic(code(sqlts::manifest_conflict), help("rename the table"))]
    ManifestConflict { table: String, manifest: String },

    #[error("key column '{column}' of table '{table}' becomes parameter '{parameter}', which clashes with {clash}")]
    #[diagnostic(
        code(sqlts::key_parameter_conflict),
        help("rename the key column so its parameter name is unique within the generated module")
    )]
    KeyParameterConflict {
        table: String,
        column: String,
        parameter: String,
        clash: String,
    },
}
