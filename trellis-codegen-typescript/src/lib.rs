//! TypeScript declaration backend: structural interfaces, one per
//! object shape. Member names stay verbatim so they match the JSON wire
//! names an example instance carries.

mod dialect;
mod format;

pub use dialect::TypeScript;

use trellis_codegen::{DEFAULT_ROOT_NAME, DEFAULT_SEPARATOR, DeclareOptions, Result};
use trellis_ir::SchemaNode;

/// Emit TypeScript interface declarations for a schema with the default
/// separator and root name.
pub fn emit(schema: &SchemaNode, options: &DeclareOptions<'_>) -> Result<String> {
    trellis_codegen::emit_declarations(
        schema,
        DEFAULT_SEPARATOR,
        DEFAULT_ROOT_NAME,
        &TypeScript,
        options,
    )
}
