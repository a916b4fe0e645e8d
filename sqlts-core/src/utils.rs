//! Shared utility functions for code generation.

/// Convert a table or column name to a type name (e.g., "user_roles" -> "UserRoles").
///
/// Each `_`-separated fragment gets an uppercase first letter and a lowercase
/// remainder; empty fragments contribute nothing.
pub fn to_type_name(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_roles" -> "userRoles")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_type_name(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Check whether a name can be used as a bare identifier in C-like languages.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_type_name() {
        assert_eq!(to_type_name("users"), "Users");
        assert_eq!(to_type_name("user_roles"), "UserRoles");
        assert_eq!(to_type_name("USER_ROLES"), "UserRoles");
        assert_eq!(to_type_name("hElLo"), "Hello");
        assert_eq!(to_type_name(""), "");
    }

    #[test]
    fn test_to_type_name_skips_empty_fragments() {
        assert_eq!(to_type_name("a__b"), "AB");
        assert_eq!(to_type_name("_private_"), "Private");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("users"), "users");
        assert_eq!(to_camel_case("user_roles"), "userRoles");
        assert_eq!(to_camel_case("API_keys"), "apiKeys");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("id"));
        assert!(is_identifier("_created_at"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier("full name"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }
}
