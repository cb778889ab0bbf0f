//! Paths, operations, parameters and responses.

use indexmap::IndexMap;
use serde::Deserialize;
use trellis_ir::SchemaNode;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
        }
    }

    /// Case-insensitive lookup ("GET", "get").
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One path entry: the operations available on a route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
        }
    }

    /// Present operations, in method order.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

/// One operation on a path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Parameters in the given location ("query", "path", "body", ...).
    pub fn parameters_in<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Parameter> {
        self.parameters
            .iter()
            .filter(move |parameter| parameter.location == location)
    }

    /// The response schema for a status code, if declared.
    pub fn response_schema(&self, status: &str) -> Option<&SchemaNode> {
        self.responses.get(status)?.schema.as_ref()
    }
}

/// One operation parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    /// Schema for body parameters.
    pub schema: Option<SchemaNode>,
    /// Inline type for non-body parameters.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub format: Option<String>,
}

/// One declared response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    pub description: Option<String>,
    pub schema: Option<SchemaNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("patch"), Some(Method::Patch));
        assert_eq!(Method::parse("brew"), None);
    }

    #[test]
    fn test_path_item_operations() {
        let item = PathItem {
            get: Some(Operation::default()),
            post: Some(Operation::default()),
            ..PathItem::default()
        };
        let methods: Vec<Method> = item.operations().map(|(method, _)| method).collect();
        assert_eq!(methods, [Method::Get, Method::Post]);
    }
}
