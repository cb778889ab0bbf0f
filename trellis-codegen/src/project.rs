//! Member-info projection over the flattened sequence.

use std::collections::HashMap;

use trellis_ir::{FlatNode, MemberInfo, SchemaNode, TypeKind};

/// Derive structural facts for every record of a flattened sequence.
///
/// One output per input, order preserved. A key map over the already-seen
/// prefix answers the parent lookups in O(1); the parent of a record is
/// always yielded before it, so a single forward pass suffices.
pub fn project<'a>(nodes: Vec<FlatNode<'a>>) -> Vec<MemberInfo<'a>> {
    let mut seen: HashMap<String, (TypeKind, &'a SchemaNode)> = HashMap::new();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        let parent = seen.get(node.parent_key.as_str()).copied();
        let parent_kind = parent.map(|(kind, _)| kind);
        let is_root = node.is_root();
        let is_array_item =
            node.kind == TypeKind::Primitive && parent_kind == Some(TypeKind::Array);
        let is_required = parent.is_some_and(|(kind, schema)| {
            kind == TypeKind::Object && schema.requires(&node.name)
        });
        seen.insert(node.key.clone(), (node.kind, node.schema));
        out.push(MemberInfo {
            is_root,
            is_array_item,
            parent_kind,
            has_reference: node.schema.reference.is_some(),
            has_empty_reference: node.schema.has_empty_reference(),
            is_required,
            node,
        });
    }
    out
}
