//! Declaration emission, shared across dialects.

use trellis_core::{singularize, to_pascal_case};
use trellis_ir::{MemberInfo, SchemaNode, TypeKind};

use crate::error::{Error, Result};
use crate::flatten::flatten;
use crate::language::{DeclareOptions, Dialect};
use crate::mapping::resolve_value_kind;
use crate::placeholder::{PatchBuffer, token};
use crate::project::project;

/// Emit type declarations for a schema in the given dialect.
///
/// The flattened sequence is consumed once. The root opens the
/// declaration named by the options; each object-valued property (and
/// each array-of-object item) appends a member line into the enclosing
/// declaration's placeholder and opens its own declaration at the end of
/// the buffer, so declarations accumulate as flat siblings in emission
/// order rather than nesting lexically. The finished raw text runs
/// through the dialect's formatter.
pub fn emit_declarations(
    schema: &SchemaNode,
    separator: &str,
    root_name: &str,
    dialect: &dyn Dialect,
    options: &DeclareOptions<'_>,
) -> Result<String> {
    if options.name.is_empty() {
        return Err(Error::InvalidArgument {
            name: "declaration name",
        });
    }
    if schema.kind() != TypeKind::Object {
        return Err(Error::UnsupportedShape {
            found: schema.kind().as_str(),
        });
    }

    let keep: Vec<&str> = options.keep_singular.iter().map(String::as_str).collect();
    let members = project(flatten(schema, separator, root_name)?.collect());
    let mut buffer = PatchBuffer::new();

    for member in &members {
        let node = &member.node;
        if member.is_root {
            buffer.append(&dialect.declaration(&options.name, &token(&node.key)));
            continue;
        }

        let inside_array = member.parent_kind == Some(TypeKind::Array);
        match node.kind {
            // An array's object item: the member line was already emitted
            // at the array property; here the item's own declaration
            // opens. Pure references point at a type declared elsewhere.
            TypeKind::Object if inside_array => {
                if !member.has_empty_reference {
                    let type_name = type_name_for(&node.name, &keep);
                    buffer.append(&dialect.declaration(&type_name, &token(&node.key)));
                }
            }
            TypeKind::Object => {
                let type_token = if member.has_empty_reference {
                    to_pascal_case(node.schema.reference_name().unwrap_or(&node.name))
                } else {
                    type_name_for(&node.name, &keep)
                };
                let type_token = replace_type(options, member, type_token);
                let line = dialect.member(&node.name, &type_token, member.is_required, options);
                buffer.splice(&node.parent_key, &line);
                if !member.has_empty_reference {
                    buffer.append(
                        &dialect.declaration(&type_name_for(&node.name, &keep), &token(&node.key)),
                    );
                }
            }
            // Arrays and primitives sitting inside an array contributed
            // to the element type at the outermost array property.
            TypeKind::Array if inside_array => {}
            TypeKind::Primitive if inside_array => {}
            TypeKind::Array => {
                let element = element_type(node.schema, &node.name, &keep, dialect, options)?;
                let type_token = replace_type(
                    options,
                    member,
                    dialect.collection_type(&element, options),
                );
                let line = dialect.member(&node.name, &type_token, member.is_required, options);
                buffer.splice(&node.parent_key, &line);
            }
            TypeKind::Primitive => {
                let kind = resolve_value_kind(node.schema)?;
                let type_token =
                    replace_type(options, member, dialect.value_type(kind, options).to_string());
                let line = dialect.member(&node.name, &type_token, member.is_required, options);
                buffer.splice(&node.parent_key, &line);
            }
        }
    }
    Ok(dialect.format(&buffer.finish()))
}

/// Element type of an array member, resolved locally from the item
/// schema chain so the member line can be written when the array
/// property itself is visited.
fn element_type(
    array: &SchemaNode,
    name: &str,
    keep: &[&str],
    dialect: &dyn Dialect,
    options: &DeclareOptions<'_>,
) -> Result<String> {
    let Some(items) = &array.items else {
        return Ok(dialect
            .value_type(trellis_core::ValueKind::Any, options)
            .to_string());
    };
    match items.kind() {
        TypeKind::Object => Ok(match items.reference_name() {
            Some(reference) if items.has_empty_reference() => to_pascal_case(reference),
            _ => type_name_for(name, keep),
        }),
        TypeKind::Array => {
            let inner = element_type(items, name, keep, dialect, options)?;
            Ok(dialect.collection_type(&inner, options))
        }
        TypeKind::Primitive => {
            let kind = resolve_value_kind(items)?;
            Ok(dialect.value_type(kind, options).to_string())
        }
    }
}

/// Declaration name derived from a property name: singularized (plural
/// array properties name their element type), then pascal-cased.
fn type_name_for(name: &str, keep: &[&str]) -> String {
    to_pascal_case(&singularize(name, keep))
}

fn replace_type(
    options: &DeclareOptions<'_>,
    member: &MemberInfo<'_>,
    resolved: String,
) -> String {
    match options.type_replacer {
        Some(replacer) => replacer(member, &resolved).unwrap_or(resolved),
        None => resolved,
    }
}
