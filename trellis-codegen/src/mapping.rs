//! Stage one of type mapping, with the typed error attached.

use trellis_core::ValueKind;
use trellis_ir::SchemaNode;

use crate::error::{Error, Result};

/// Resolve a primitive schema node to its semantic value kind.
///
/// A pair outside the table is a fatal [`Error::UnmappedType`]; emitters
/// never guess a type.
pub fn resolve_value_kind(schema: &SchemaNode) -> Result<ValueKind> {
    ValueKind::from_parts(schema.primitive_type(), schema.format.as_deref()).ok_or_else(|| {
        Error::UnmappedType {
            type_name: schema.primitive_type().to_string(),
            format: schema.format.clone().unwrap_or_default(),
        }
    })
}
