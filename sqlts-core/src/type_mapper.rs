//! Type mapping between declared storage types and language-specific types.

/// Storage classes recognized in a schema.
///
/// This is a language-agnostic classification of a column's declared type.
/// Use a [`TypeMapper`] to convert it to a language-specific type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Blob,
    /// Stored as 0/1 integers.
    Boolean,
    /// Stored as text.
    Timestamp,
    /// Any declared type that is not recognized.
    Unknown,
}

impl ColumnType {
    /// Classify a declared storage type such as `INTEGER` or `VARCHAR(255)`.
    ///
    /// Only the part before the first `(` is considered, case-insensitively.
    /// `VARCHAR` is the only alias; every other unrecognized name, including
    /// `INT` and `DATETIME`, falls back to [`ColumnType::Unknown`].
    pub fn from_storage_type(declared: &str) -> Self {
        let base = declared.split('(').next().unwrap_or_default();
        match base.trim().to_uppercase().as_str() {
            "INTEGER" => ColumnType::Integer,
            "REAL" => ColumnType::Real,
            "TEXT" | "VARCHAR" => ColumnType::Text,
            "BLOB" => ColumnType::Blob,
            "BOOLEAN" => ColumnType::Boolean,
            "TIMESTAMP" => ColumnType::Timestamp,
            _ => ColumnType::Unknown,
        }
    }
}

/// Trait for mapping column types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map a column type to a language-specific type string
    fn map_column_type(&self, column_type: ColumnType) -> &'static str;

    /// Map a column type that may hold no value
    fn map_nullable_type(&self, column_type: ColumnType) -> String;

    /// Map a raw declared storage type in one step
    fn map_storage_type(&self, declared: &str) -> &'static str {
        self.map_column_type(ColumnType::from_storage_type(declared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_storage_types() {
        assert_eq!(ColumnType::from_storage_type("INTEGER"), ColumnType::Integer);
        assert_eq!(ColumnType::from_storage_type("REAL"), ColumnType::Real);
        assert_eq!(ColumnType::from_storage_type("TEXT"), ColumnType::Text);
        assert_eq!(ColumnType::from_storage_type("BLOB"), ColumnType::Blob);
        assert_eq!(ColumnType::from_storage_type("BOOLEAN"), ColumnType::Boolean);
        assert_eq!(
            ColumnType::from_storage_type("TIMESTAMP"),
            ColumnType::Timestamp
        );
    }

    #[test]
    fn test_qualifier_is_ignored() {
        assert_eq!(ColumnType::from_storage_type("VARCHAR(255)"), ColumnType::Text);
        assert_eq!(ColumnType::from_storage_type("REAL(10, 2)"), ColumnType::Real);
        assert_eq!(ColumnType::from_storage_type("varchar (32)"), ColumnType::Text);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(ColumnType::from_storage_type("integer"), ColumnType::Integer);
        assert_eq!(ColumnType::from_storage_type("Boolean"), ColumnType::Boolean);
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(ColumnType::from_storage_type("JSONB"), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type(""), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type("(12)"), ColumnType::Unknown);
    }

    #[test]
    fn test_only_varchar_is_aliased() {
        assert_eq!(ColumnType::from_storage_type("DATETIME"), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type("INT"), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type("BIGINT"), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type("DOUBLE"), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type("CHAR(8)"), ColumnType::Unknown);
        assert_eq!(ColumnType::from_storage_type("VARCHAR"), ColumnType::Text);
    }

    struct Upper;

    impl TypeMapper for Upper {
        fn map_column_type(&self, column_type: ColumnType) -> &'static str {
            match column_type {
                ColumnType::Text => "TEXT",
                ColumnType::Unknown => "UNKNOWN",
                _ => "OTHER",
            }
        }

        fn map_nullable_type(&self, column_type: ColumnType) -> String {
            format!("{}?", self.map_column_type(column_type))
        }
    }

    #[test]
    fn test_map_storage_type_composes() {
        assert_eq!(Upper.map_storage_type("varchar(10)"), "TEXT");
        assert_eq!(Upper.map_storage_type("datetime"), "UNKNOWN");
    }
}
