//! C# declaration backend: class declarations with `{ get; set; }`
//! auto-properties, one class per object shape.

mod dialect;
mod format;

pub use dialect::CSharp;

use trellis_codegen::{DEFAULT_ROOT_NAME, DEFAULT_SEPARATOR, DeclareOptions, Result};
use trellis_ir::SchemaNode;

/// Emit C# class declarations for a schema with the default separator
/// and root name.
pub fn emit(schema: &SchemaNode, options: &DeclareOptions<'_>) -> Result<String> {
    trellis_codegen::emit_declarations(schema, DEFAULT_SEPARATOR, DEFAULT_ROOT_NAME, &CSharp, options)
}
