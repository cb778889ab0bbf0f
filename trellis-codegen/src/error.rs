//! Error taxonomy for flattening and emission.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for trellis-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the flattener and the emitters.
///
/// None of these are recoverable mid-call: an emit either returns
/// complete, well-formed text or fails outright.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required input was empty. Rejected before any work is performed.
    #[error("{name} must not be empty")]
    #[diagnostic(code(trellis::codegen::invalid_argument))]
    InvalidArgument { name: &'static str },

    /// Declaration emission was requested for a schema whose root is not
    /// an object. Declarations describe an object shape.
    #[error("declarations require an object schema at the root, found {found}")]
    #[diagnostic(
        code(trellis::codegen::unsupported_shape),
        help("emit an example instance instead, or wrap the schema in an object")
    )]
    UnsupportedShape { found: &'static str },

    /// A primitive `(type, format)` pair has no entry in the value-kind
    /// table. This signals a gap in the mapping table, not bad data.
    #[error("no type mapping for `{type_name}` with format `{format}`")]
    #[diagnostic(
        code(trellis::codegen::unmapped_type),
        help("extend the value-kind table or supply a custom type replacer")
    )]
    UnmappedType { type_name: String, format: String },
}
