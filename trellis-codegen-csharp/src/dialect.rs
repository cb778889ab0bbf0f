//! C# dialect implementation.

use trellis_codegen::language::{ArrayStyle, DateStyle, DeclareOptions, Dialect};
use trellis_core::{ValueKind, to_pascal_case};

use crate::format;

/// The C# output dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharp;

impl Dialect for CSharp {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn value_type(&self, kind: ValueKind, options: &DeclareOptions<'_>) -> &'static str {
        match kind {
            ValueKind::String => "string",
            ValueKind::Integer => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Boolean => "bool",
            ValueKind::Date | ValueKind::DateTime => match options.date_style {
                DateStyle::Temporal => "DateTime",
                DateStyle::Text => "string",
            },
            ValueKind::Uuid => "Guid",
            ValueKind::Bytes => "byte[]",
            ValueKind::Any => "object",
        }
    }

    fn collection_type(&self, element: &str, options: &DeclareOptions<'_>) -> String {
        match options.array_style {
            ArrayStyle::Collection => format!("List<{element}>"),
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
        let suffix = if options.nullable && !required { "?" } else { "" };
        format!(
            "public {}{} {} {{ get; set; }}",
            type_token,
            suffix,
            to_pascal_case(name)
        )
    }

    fn declaration(&self, type_name: &str, body: &str) -> String {
        format!("public class {type_name} {{{body}}}")
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
        assert_eq!(CSharp.value_type(ValueKind::Integer, &options), "int");
        assert_eq!(CSharp.value_type(ValueKind::Long, &options), "long");
        assert_eq!(CSharp.value_type(ValueKind::Boolean, &options), "bool");
        assert_eq!(CSharp.value_type(ValueKind::Uuid, &options), "Guid");
        assert_eq!(CSharp.value_type(ValueKind::DateTime, &options), "DateTime");
    }

    #[test]
    fn test_date_style_falls_back_to_string() {
        let mut options = DeclareOptions::new("Root");
        options.date_style = DateStyle::Text;
        assert_eq!(CSharp.value_type(ValueKind::Date, &options), "string");
    }

    #[test]
    fn test_collection_styles() {
        let mut options = DeclareOptions::new("Root");
        assert_eq!(CSharp.collection_type("string", &options), "List<string>");
        options.array_style = ArrayStyle::Native;
        assert_eq!(CSharp.collection_type("string", &options), "string[]");
    }

    #[test]
    fn test_member_pascal_cases_names() {
        let options = DeclareOptions::new("Root");
        assert_eq!(
            CSharp.member("user_name", "string", true, &options),
            "public string UserName { get; set; }"
        );
    }

    #[test]
    fn test_member_nullable_marker() {
        let mut options = DeclareOptions::new("Root");
        options.nullable = true;
        assert_eq!(
            CSharp.member("id", "int", false, &options),
            "public int? Id { get; set; }"
        );
        assert_eq!(
            CSharp.member("id", "int", true, &options),
            "public int Id { get; set; }"
        );
    }
}
