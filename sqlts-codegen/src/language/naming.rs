//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform table and column names into identifiers and how
/// to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform table name to type name (e.g., "user_roles" -> "UserRoles")
    pub table_to_type: fn(&str) -> String,
    /// Transform table name to a value name (e.g., "user_roles" -> "userRoles")
    pub table_to_value: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a table name into a type name.
    ///
    /// Type names are used as prefixes/suffixes of other identifiers, so they
    /// are not escaped.
    pub fn type_name(&self, table: &str) -> String {
        (self.table_to_type)(table)
    }

    /// Transform a table name into a value name.
    ///
    /// Like type names, value names only appear with a suffix (`usersColumns`)
    /// and are not escaped.
    pub fn value_name(&self, table: &str) -> String {
        (self.table_to_value)(table)
    }

    /// Make a column name safe for use as a parameter name.
    ///
    /// Characters that cannot appear in an identifier become `_`, and a name
    /// starting with a digit gets a leading `_`.
    pub fn param_name(&self, column: &str) -> String {
        let mut sanitized: String = column
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if sanitized.is_empty() || sanitized.starts_with(|c: char| c.is_ascii_digit()) {
            sanitized.insert(0, '_');
        }
        self.safe_name(&sanitized)
    }
}
