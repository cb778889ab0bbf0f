//! API document parsing and query accessors for the trellis code
//! generator.
//!
//! This crate is the schema-reading collaborator of the pipeline: it
//! turns raw JSON or YAML document text into the in-memory tree the
//! flattener consumes, and exposes read-only projections over paths,
//! operations, parameters, responses and reusable definitions. It does
//! not validate documents, and it resolves references one level at a
//! time; transitive expansion is the caller's business.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod path;

use indexmap::IndexMap;
use serde::Deserialize;
use trellis_ir::SchemaNode;

pub use error::{Error, Result};
pub use path::{Method, Operation, Parameter, PathItem, Response};

/// Parse bare JSON schema text into a tree, outside any document.
pub fn schema_from_json(text: &str, filename: &str) -> Result<SchemaNode> {
    serde_json::from_str(text).map_err(|e| Error::parse_json(text, filename, e))
}

/// Parse bare YAML schema text into a tree, outside any document.
pub fn schema_from_yaml(text: &str, filename: &str) -> Result<SchemaNode> {
    serde_yaml::from_str(text).map_err(|e| Error::parse_yaml(text, filename, e))
}

/// A parsed API document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    pub swagger: Option<String>,
    pub openapi: Option<String>,
    pub info: Option<Info>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable definitions (`#/definitions/...`).
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaNode>,
    /// Reusable components (`#/components/schemas/...`).
    pub components: Option<Components>,
}

/// Reusable component holder of newer documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaNode>,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl Document {
    /// Parse a JSON document. `filename` labels parse diagnostics.
    pub fn from_json(text: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::parse_json(text, filename, e))
    }

    /// Parse a YAML document. `filename` labels parse diagnostics.
    pub fn from_yaml(text: &str, filename: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::parse_yaml(text, filename, e))
    }

    /// Route templates, in document order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    pub fn path(&self, path: &str) -> Option<&PathItem> {
        self.paths.get(path)
    }

    /// One operation, by route and method.
    pub fn operation(&self, path: &str, method: Method) -> Option<&Operation> {
        self.path(path)?.operation(method)
    }

    /// Every operation in the document, in document order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| (path.as_str(), method, op))
        })
    }

    /// Names of the reusable definitions, in document order.
    pub fn definition_names(&self) -> impl Iterator<Item = &str> {
        let components = self
            .components
            .iter()
            .flat_map(|c| c.schemas.keys().map(String::as_str));
        self.definitions.keys().map(String::as_str).chain(components)
    }

    /// A reusable definition by bare name.
    pub fn definition(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions
            .get(name)
            .or_else(|| self.components.as_ref()?.schemas.get(name))
    }

    /// Resolve a reference id one level (`#/definitions/Pet`,
    /// `#/components/schemas/Pet`, or a bare name). Nested references
    /// inside the result are left untouched.
    pub fn resolve(&self, reference: &str) -> Option<&SchemaNode> {
        let name = reference.rsplit('/').next().unwrap_or(reference);
        self.definition(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE_JSON: &str = r##"{
        "swagger": "2.0",
        "info": {"title": "Petstore", "version": "1.0.0"},
        "paths": {
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "tags": ["pets"],
                    "parameters": [
                        {"name": "limit", "in": "query", "type": "integer", "format": "int32"}
                    ],
                    "responses": {
                        "200": {
                            "description": "A list of pets",
                            "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}}
                        }
                    }
                },
                "post": {
                    "operationId": "createPet",
                    "parameters": [
                        {"name": "pet", "in": "body", "required": true,
                         "schema": {"$ref": "#/definitions/Pet"}}
                    ],
                    "responses": {"201": {"description": "Created"}}
                }
            }
        },
        "definitions": {
            "Pet": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": {"type": "integer", "format": "int64"},
                    "name": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                }
            }
        }
    }"##;

    #[test]
    fn test_parse_and_query_json() {
        let doc = Document::from_json(PETSTORE_JSON, "petstore.json").unwrap();
        assert_eq!(doc.paths().collect::<Vec<_>>(), ["/pets"]);
        assert_eq!(doc.operations().count(), 2);

        let get = doc.operation("/pets", Method::Get).unwrap();
        assert_eq!(get.operation_id.as_deref(), Some("listPets"));
        assert_eq!(get.parameters_in("query").count(), 1);
        assert!(get.response_schema("200").is_some());
        assert!(get.response_schema("404").is_none());

        let post = doc.operation("/pets", Method::Post).unwrap();
        let body = post.parameters_in("body").next().unwrap();
        assert!(body.required);
        assert!(body.schema.as_ref().unwrap().has_empty_reference());
    }

    #[test]
    fn test_resolve_reference() {
        let doc = Document::from_json(PETSTORE_JSON, "petstore.json").unwrap();
        let schema = doc
            .operation("/pets", Method::Get)
            .unwrap()
            .response_schema("200")
            .unwrap();
        let reference = schema.items.as_ref().unwrap().reference.as_deref().unwrap();
        let pet = doc.resolve(reference).unwrap();
        assert!(pet.requires("id"));
        assert_eq!(pet.properties.len(), 3);
        // Resolution is single-level only
        assert!(doc.resolve("#/definitions/Ghost").is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "\
swagger: \"2.0\"
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        \"200\":
          description: ok
definitions:
  Pet:
    type: object
    properties:
      id:
        type: integer
";
        let doc = Document::from_yaml(yaml, "petstore.yaml").unwrap();
        assert!(doc.operation("/pets", Method::Get).is_some());
        assert!(doc.definition("Pet").is_some());
    }

    #[test]
    fn test_components_schemas() {
        let json = r#"{
            "openapi": "3.0.0",
            "components": {"schemas": {"Pet": {"type": "object"}}}
        }"#;
        let doc = Document::from_json(json, "doc.json").unwrap();
        assert!(doc.definition("Pet").is_some());
        assert!(doc.resolve("#/components/schemas/Pet").is_some());
        assert_eq!(doc.definition_names().collect::<Vec<_>>(), ["Pet"]);
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = Document::from_json("{ not json", "broken.json").unwrap_err();
        assert!(matches!(err, Error::Parse { format: "JSON", .. }));
    }
}
