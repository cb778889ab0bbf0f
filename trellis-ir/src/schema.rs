//! The caller-facing schema tree.

use indexmap::IndexMap;
use serde::Deserialize;

/// Structural kind of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Object,
    Array,
    /// Any non-object, non-array type, untyped nodes included.
    Primitive,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Object => "object",
            TypeKind::Array => "array",
            TypeKind::Primitive => "primitive",
        }
    }
}

/// One node of a parsed schema tree.
///
/// Property order is preserved from the source document; emission order
/// depends on it. Exactly one of `properties` and `items` is populated
/// (or neither, for primitives and pure references).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaNode {
    /// Raw type token from the document ("object", "array", "string", ...).
    /// `None` means untyped.
    #[serde(rename = "type")]
    pub type_name: Option<String>,

    /// Optional qualifier refining the type (e.g. "int64", "date-time").
    pub format: Option<String>,

    /// Child properties, object nodes only.
    #[serde(default)]
    pub properties: IndexMap<String, SchemaNode>,

    /// Item schema, array nodes only.
    pub items: Option<Box<SchemaNode>>,

    /// Identifier of a reusable definition this node stands for.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Names of required properties, object nodes only.
    #[serde(default)]
    pub required: Vec<String>,

    pub description: Option<String>,

    /// Admissible values for enum-typed nodes.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    /// Human-readable descriptions paired index-wise with `enum_values`.
    #[serde(rename = "x-enum-descriptions")]
    pub enum_descriptions: Option<Vec<String>>,
}

impl SchemaNode {
    /// A primitive node with the given type token ("" for untyped).
    pub fn primitive(type_name: &str) -> Self {
        Self {
            type_name: (!type_name.is_empty()).then(|| type_name.to_string()),
            ..Self::default()
        }
    }

    /// An object node with the given properties, in order.
    pub fn object<'a>(properties: impl IntoIterator<Item = (&'a str, SchemaNode)>) -> Self {
        Self {
            type_name: Some("object".to_string()),
            properties: properties
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
            ..Self::default()
        }
    }

    /// An array node with the given item schema.
    pub fn array(items: SchemaNode) -> Self {
        Self {
            type_name: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn with_required(mut self, names: &[&str]) -> Self {
        self.required = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Structural kind, derived from the type token and inline children.
    pub fn kind(&self) -> TypeKind {
        match self.type_name.as_deref() {
            Some("object") => TypeKind::Object,
            Some("array") => TypeKind::Array,
            Some(_) => TypeKind::Primitive,
            None if !self.properties.is_empty() => TypeKind::Object,
            None if self.items.is_some() => TypeKind::Array,
            // A bare reference stands for a reusable definition, which is
            // an object shape even though nothing is inlined here.
            None if self.reference.is_some() => TypeKind::Object,
            None => TypeKind::Primitive,
        }
    }

    /// The primitive type token, "" for untyped nodes.
    pub fn primitive_type(&self) -> &str {
        self.type_name.as_deref().unwrap_or("")
    }

    /// True when this node is purely a pointer to a reusable definition:
    /// it names a reference and inlines none of that definition's shape.
    pub fn has_empty_reference(&self) -> bool {
        self.reference.is_some() && self.properties.is_empty() && self.items.is_none()
    }

    /// Final path segment of the reference id, if any
    /// (`#/definitions/Pet` -> `Pet`).
    pub fn reference_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(|r| r.rsplit('/').next().unwrap_or(r))
    }

    /// Whether `name` appears in this object's required set.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Description for an enum value, looked up index-wise against the
    /// `x-enum-descriptions` extension.
    pub fn enum_description(&self, value: &str) -> Option<&str> {
        let values = self.enum_values.as_ref()?;
        let descriptions = self.enum_descriptions.as_ref()?;
        let index = values.iter().position(|v| match v.as_str() {
            Some(s) => s == value,
            None => v.to_string() == value,
        })?;
        descriptions.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_type_token() {
        assert_eq!(SchemaNode::primitive("string").kind(), TypeKind::Primitive);
        assert_eq!(SchemaNode::object([]).kind(), TypeKind::Object);
        assert_eq!(
            SchemaNode::array(SchemaNode::primitive("integer")).kind(),
            TypeKind::Array
        );
    }

    #[test]
    fn test_kind_inferred_without_type_token() {
        let untyped = SchemaNode::default();
        assert_eq!(untyped.kind(), TypeKind::Primitive);

        let mut with_props = SchemaNode::default();
        with_props
            .properties
            .insert("id".to_string(), SchemaNode::primitive("integer"));
        assert_eq!(with_props.kind(), TypeKind::Object);

        let with_items = SchemaNode {
            items: Some(Box::new(SchemaNode::primitive("string"))),
            ..SchemaNode::default()
        };
        assert_eq!(with_items.kind(), TypeKind::Array);
    }

    #[test]
    fn test_empty_reference() {
        let node = SchemaNode::default().with_reference("#/definitions/Pet");
        assert!(node.has_empty_reference());
        assert_eq!(node.kind(), TypeKind::Object);
        assert_eq!(node.reference_name(), Some("Pet"));

        let inlined = SchemaNode::object([("id", SchemaNode::primitive("integer"))])
            .with_reference("#/definitions/Pet");
        assert!(!inlined.has_empty_reference());
    }

    #[test]
    fn test_required() {
        let node = SchemaNode::object([("id", SchemaNode::primitive("integer"))])
            .with_required(&["id"]);
        assert!(node.requires("id"));
        assert!(!node.requires("name"));
    }

    #[test]
    fn test_enum_description() {
        let node = SchemaNode {
            enum_values: Some(vec!["open".into(), "closed".into()]),
            enum_descriptions: Some(vec![
                "Accepting orders".to_string(),
                "No longer accepting orders".to_string(),
            ]),
            ..SchemaNode::primitive("string")
        };
        assert_eq!(node.enum_description("open"), Some("Accepting orders"));
        assert_eq!(node.enum_description("missing"), None);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r##"{
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "owner": {"$ref": "#/definitions/Owner"}
            }
        }"##;
        let node: SchemaNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind(), TypeKind::Object);
        assert_eq!(node.properties.len(), 3);
        // Declaration order survives parsing
        let names: Vec<&String> = node.properties.keys().collect();
        assert_eq!(names, ["id", "tags", "owner"]);
        assert!(node.properties["owner"].has_empty_reference());
    }
}
