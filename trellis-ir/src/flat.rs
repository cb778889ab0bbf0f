//! The flattened schema record.

use crate::{SchemaNode, TypeKind};

/// One record of the flattened schema sequence.
///
/// The flattener yields one `FlatNode` per schema node, in depth-first
/// order with parents strictly before children. The `key`/`parent_key`
/// pair carries enough positional metadata for an emitter to reconstruct
/// nesting from the linear sequence alone.
#[derive(Debug, Clone)]
pub struct FlatNode<'a> {
    /// Property name; the caller-supplied root name for the top node; or,
    /// for a primitive element directly inside an array, the synthesized
    /// `<arrayName>...[<type>.<format>]` marker.
    pub name: String,

    /// Full path: ancestors joined by the caller-chosen separator, then
    /// the name. The root's key is the root name itself.
    pub key: String,

    /// `key` without the final component; "" for the root.
    pub parent_key: String,

    /// Ancestor names, root to immediate parent. Empty iff this is the
    /// root; exactly one node per flatten call satisfies that.
    pub parents: Vec<String>,

    pub kind: TypeKind,

    pub format: Option<String>,

    /// The schema node this record was flattened from.
    pub schema: &'a SchemaNode,
}

impl FlatNode<'_> {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
