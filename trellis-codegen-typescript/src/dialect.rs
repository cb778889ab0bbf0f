//! TypeScript dialect implementation.

use trellis_codegen::language::{ArrayStyle, DateStyle, DeclareOptions, Dialect};
use trellis_core::ValueKind;

use crate::format;

/// The TypeScript output dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScript;

impl Dialect for TypeScript {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn value_type(&self, kind: ValueKind, options: &DeclareOptions<'_>) -> &'static str {
        match kind {
            ValueKind::String | ValueKind::Uuid | ValueKind::Bytes => "string",
            ValueKind::Integer | ValueKind::Long | ValueKind::Float | ValueKind::Double => {
                "number"
            }
            ValueKind::Boolean => "boolean",
            ValueKind::Date | ValueKind::DateTime => match options.date_style {
                DateStyle::Temporal => "Date",
                DateStyle::Text => "string",
            },
            ValueKind::Any => "any",
        }
    }

    fn collection_type(&self, element: &str, options: &DeclareOptions<'_>) -> String {
        match options.array_style {
            ArrayStyle::Collection => format!("Array<{element}>"),
            ArrayStyle::Native => format!("{element}[]"),
        }
    }

    fn member(
        &self,
        name: &str,
        type_token: &str,
        required: bool,
        options: &DeclareOptions<'_>,
    ) -> String {
        let optional = if required { "" } else { "?" };
        let nullable = if options.nullable && !required {
            " | null"
        } else {
            ""
        };
        format!("{name}{optional}: {type_token}{nullable};")
    }

    fn declaration(&self, type_name: &str, body: &str) -> String {
        format!("export interface {type_name} {{{body}}}")
    }

    fn format(&self, raw: &str) -> String {
        format::format(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        let options = DeclareOptions::new("Root");
        assert_eq!(TypeScript.value_type(ValueKind::Integer, &options), "number");
        assert_eq!(TypeScript.value_type(ValueKind::Long, &options), "number");
        assert_eq!(TypeScript.value_type(ValueKind::String, &options), "string");
        assert_eq!(TypeScript.value_type(ValueKind::Boolean, &options), "boolean");
        assert_eq!(TypeScript.value_type(ValueKind::DateTime, &options), "Date");
        assert_eq!(TypeScript.value_type(ValueKind::Any, &options), "any");
    }

    #[test]
    fn test_date_style_falls_back_to_string() {
        let mut options = DeclareOptions::new("Root");
        options.date_style = DateStyle::Text;
        assert_eq!(TypeScript.value_type(ValueKind::DateTime, &options), "string");
    }

    #[test]
    fn test_collection_styles() {
        let mut options = DeclareOptions::new("Root");
        assert_eq!(TypeScript.collection_type("number", &options), "Array<number>");
        options.array_style = ArrayStyle::Native;
        assert_eq!(TypeScript.collection_type("number", &options), "number[]");
    }

    #[test]
    fn test_member_markers() {
        let mut options = DeclareOptions::new("Root");
        assert_eq!(TypeScript.member("id", "number", true, &options), "id: number;");
        assert_eq!(TypeScript.member("id", "number", false, &options), "id?: number;");
        options.nullable = true;
        assert_eq!(
            TypeScript.member("id", "number", false, &options),
            "id?: number | null;"
        );
        assert_eq!(TypeScript.member("id", "number", true, &options), "id: number;");
    }

    #[test]
    fn test_member_names_stay_verbatim() {
        let options = DeclareOptions::new("Root");
        assert_eq!(
            TypeScript.member("user_name", "string", true, &options),
            "user_name: string;"
        );
    }
}
