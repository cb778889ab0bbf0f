//! Structural facts derived from the flattened sequence.

use crate::{FlatNode, TypeKind};

/// A flattened node plus the structural facts emitters need, so they can
/// work off the linear sequence without re-walking the tree.
#[derive(Debug, Clone)]
pub struct MemberInfo<'a> {
    pub node: FlatNode<'a>,

    pub is_root: bool,

    /// Primitive whose parent record is an array (i.e. this IS the
    /// array's item type, not a sibling property).
    pub is_array_item: bool,

    /// Kind of the record whose `key` equals this node's `parent_key`;
    /// `None` for the root.
    pub parent_kind: Option<TypeKind>,

    pub has_reference: bool,

    /// Reference set and nothing inlined: purely a pointer to a reusable
    /// definition.
    pub has_empty_reference: bool,

    /// Name present in the immediate parent object's required set.
    pub is_required: bool,
}
