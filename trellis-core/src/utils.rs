//! Shared string utilities for code generation.

/// Convert a string to PascalCase (e.g., "user_name" -> "UserName").
///
/// Splits on `_` and `-`; interior capitals are preserved, so camelCase
/// input also works ("userName" -> "UserName").
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_name" -> "userName").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Singular form of a plural property name (e.g., "orders" -> "order").
///
/// Words listed in `keep` are returned unchanged, as are words ending in
/// "ss" ("address", "progress"). The rules are intentionally naive: they
/// cover the plural property names that show up in API schemas, not
/// English at large.
pub fn singularize(s: &str, keep: &[&str]) -> String {
    let lower = s.to_lowercase();
    if keep.iter().any(|k| k.eq_ignore_ascii_case(&lower)) {
        return s.to_string();
    }
    if lower.ends_with("ies") && s.len() > 3 {
        return format!("{}y", &s[..s.len() - 3]);
    }
    if ["ses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|suf| lower.ends_with(suf))
    {
        return s[..s.len() - 2].to_string();
    }
    if lower.ends_with("ss") || !lower.ends_with('s') {
        return s.to_string();
    }
    s[..s.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("user_name"), "UserName");
        assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
        assert_eq!(to_pascal_case("userName"), "UserName");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("Hello"), "hello");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_singularize_basic() {
        assert_eq!(singularize("orders", &[]), "order");
        assert_eq!(singularize("tags", &[]), "tag");
        assert_eq!(singularize("categories", &[]), "category");
        assert_eq!(singularize("statuses", &[]), "status");
        assert_eq!(singularize("boxes", &[]), "box");
    }

    #[test]
    fn test_singularize_keeps_non_plurals() {
        assert_eq!(singularize("address", &[]), "address");
        assert_eq!(singularize("order", &[]), "order");
        assert_eq!(singularize("id", &[]), "id");
    }

    #[test]
    fn test_singularize_exception_list() {
        assert_eq!(singularize("news", &["news"]), "news");
        assert_eq!(singularize("series", &["series"]), "series");
        // Without the exception the naive rule fires
        assert_eq!(singularize("news", &[]), "new");
    }
}
