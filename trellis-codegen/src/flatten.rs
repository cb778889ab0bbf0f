//! Tree-to-sequence flattening.

use trellis_ir::{FlatNode, SchemaNode, TypeKind};

use crate::error::{Error, Result};

/// Default key separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Default root-name token.
pub const DEFAULT_ROOT_NAME: &str = "$";

/// Flatten a schema tree into an ordered sequence of [`FlatNode`] records.
///
/// The walk is depth-first: every parent is yielded strictly before its
/// children, and siblings appear in declaration order. The returned
/// iterator is lazy and non-restartable; calling `flatten` again re-runs
/// the walk from scratch.
///
/// Reference-only nodes are yielded without children and never
/// dereferenced, so cyclic reference graphs cannot cause non-termination.
pub fn flatten<'a>(
    root: &'a SchemaNode,
    separator: &str,
    root_name: &str,
) -> Result<Flattener<'a>> {
    if separator.is_empty() {
        return Err(Error::InvalidArgument { name: "separator" });
    }
    if root_name.is_empty() {
        return Err(Error::InvalidArgument { name: "root name" });
    }
    Ok(Flattener {
        separator: separator.to_string(),
        stack: vec![WorkItem {
            schema: root,
            name: root_name.to_string(),
            parents: Vec::new(),
        }],
    })
}

/// One pending node of the walk. Each item carries its own ancestor list,
/// so no traversal state is shared between subtrees.
struct WorkItem<'a> {
    schema: &'a SchemaNode,
    name: String,
    parents: Vec<String>,
}

/// The flattening walk. See [`flatten`].
pub struct Flattener<'a> {
    separator: String,
    stack: Vec<WorkItem<'a>>,
}

impl<'a> Iterator for Flattener<'a> {
    type Item = FlatNode<'a>;

    fn next(&mut self) -> Option<FlatNode<'a>> {
        let item = self.stack.pop()?;
        let kind = item.schema.kind();

        // Children inherit this node's ancestors plus its own name. They
        // are pushed in reverse so the LIFO pop order matches declaration
        // order.
        match kind {
            TypeKind::Object => {
                let parents = child_parents(&item);
                for (name, child) in item.schema.properties.iter().rev() {
                    self.stack.push(WorkItem {
                        schema: child,
                        name: name.clone(),
                        parents: parents.clone(),
                    });
                }
            }
            TypeKind::Array => {
                if let Some(items) = &item.schema.items {
                    let name = match items.kind() {
                        // The marker distinguishes "this IS the array's
                        // item type" from "this is a sibling property".
                        TypeKind::Primitive => format!(
                            "{}...[{}.{}]",
                            item.name,
                            items.primitive_type(),
                            items.format.as_deref().unwrap_or("")
                        ),
                        // Object items and nested arrays reuse the array's
                        // own name; singularization turns it into a type
                        // name downstream.
                        _ => item.name.clone(),
                    };
                    self.stack.push(WorkItem {
                        schema: items,
                        name,
                        parents: child_parents(&item),
                    });
                }
            }
            TypeKind::Primitive => {}
        }

        let parent_key = item.parents.join(&self.separator);
        let key = if item.parents.is_empty() {
            item.name.clone()
        } else {
            format!("{}{}{}", parent_key, self.separator, item.name)
        };

        Some(FlatNode {
            name: item.name,
            key,
            parent_key,
            parents: item.parents,
            kind,
            format: item.schema.format.clone(),
            schema: item.schema,
        })
    }
}

fn child_parents(item: &WorkItem<'_>) -> Vec<String> {
    let mut parents = item.parents.clone();
    parents.push(item.name.clone());
    parents
}
