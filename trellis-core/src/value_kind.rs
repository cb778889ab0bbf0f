//! Semantic value kinds shared by the language backends.

/// Language-agnostic kind of a primitive schema value.
///
/// This is the first stage of type mapping: a raw `(type, format)` pair
/// from the schema resolves to a `ValueKind`, and each language backend
/// maps the kind to a concrete type token. An unknown pair resolves to
/// `None`, which callers surface as an unmapped-type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    DateTime,
    Uuid,
    Bytes,
    /// Untyped schema node; maps to the dialect's catch-all type.
    Any,
}

impl ValueKind {
    /// Resolve a raw schema `(type, format)` pair.
    ///
    /// The format qualifier refines the base type (e.g. a 32-bit versus a
    /// 64-bit integer). Pairs outside this table have no mapping.
    pub fn from_parts(type_name: &str, format: Option<&str>) -> Option<Self> {
        let format = format.unwrap_or("");
        let kind = match (type_name, format) {
            ("", "") => Self::Any,
            ("integer", "" | "int32") => Self::Integer,
            ("integer", "int64") => Self::Long,
            ("number", "" | "float") => Self::Float,
            ("number", "double") => Self::Double,
            ("boolean", "") => Self::Boolean,
            ("string", "") => Self::String,
            ("string", "date") => Self::Date,
            ("string", "date-time") => Self::DateTime,
            ("string", "uuid" | "guid") => Self::Uuid,
            ("string", "byte" | "binary") => Self::Bytes,
            ("string", "password" | "email" | "uri" | "hostname") => Self::String,
            _ => return None,
        };
        Some(kind)
    }

    /// The built-in example literal for this kind, as JSON source text.
    pub fn default_literal(&self) -> &'static str {
        match self {
            Self::String => "\"string\"",
            Self::Integer | Self::Long => "0",
            Self::Float | Self::Double => "0.0",
            Self::Boolean => "true",
            Self::Date => "\"2020-01-01\"",
            Self::DateTime => "\"2020-01-01T00:00:00Z\"",
            Self::Uuid => "\"00000000-0000-0000-0000-000000000000\"",
            Self::Bytes => "\"\"",
            Self::Any => "null",
        }
    }
}
