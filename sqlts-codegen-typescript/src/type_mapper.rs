//! TypeScript type mapper implementation.

use sqlts_core::{ColumnType, TypeMapper};

/// Maps column storage classes to the values `bun:sqlite` hands back.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_column_type(&self, column_type: ColumnType) -> &'static str {
        match column_type {
            // Large integers come back as bigint when safeIntegers is enabled
            ColumnType::Integer => "number | bigint",
            ColumnType::Real => "number",
            ColumnType::Text => "string",
            ColumnType::Blob => "Uint8Array",
            // SQLite has no boolean storage class; values are 0/1
            ColumnType::Boolean => "number",
            ColumnType::Timestamp => "string",
            ColumnType::Unknown => "unknown",
        }
    }

    fn map_nullable_type(&self, column_type: ColumnType) -> String {
        format!("{} | null", self.map_column_type(column_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_column_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_column_type(ColumnType::Integer), "number | bigint");
        assert_eq!(mapper.map_column_type(ColumnType::Real), "number");
        assert_eq!(mapper.map_column_type(ColumnType::Text), "string");
        assert_eq!(mapper.map_column_type(ColumnType::Blob), "Uint8Array");
        assert_eq!(mapper.map_column_type(ColumnType::Boolean), "number");
        assert_eq!(mapper.map_column_type(ColumnType::Timestamp), "string");
        assert_eq!(mapper.map_column_type(ColumnType::Unknown), "unknown");
    }

    #[test]
    fn test_typescript_storage_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_storage_type("INTEGER"), "number | bigint");
        assert_eq!(mapper.map_storage_type("VARCHAR(255)"), "string");
        assert_eq!(mapper.map_storage_type("JSONB"), "unknown");
        assert_eq!(mapper.map_storage_type("DATETIME"), "unknown");
        assert_eq!(mapper.map_storage_type("INT"), "unknown");
        // Mapping is idempotent
        assert_eq!(
            mapper.map_storage_type("real"),
            mapper.map_storage_type("real")
        );
    }

    #[test]
    fn test_typescript_nullable_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_nullable_type(ColumnType::Text), "string | null");
        assert_eq!(
            mapper.map_nullable_type(ColumnType::Integer),
            "number | bigint | null"
        );
        assert_eq!(
            mapper.map_nullable_type(ColumnType::Unknown),
            "unknown | null"
        );
    }
}
