//! Example-instance emission and its JSON formatter.

use std::collections::HashMap;

use trellis_ir::{MemberInfo, SchemaNode, TypeKind};

use crate::error::Result;
use crate::flatten::flatten;
use crate::mapping::resolve_value_kind;
use crate::placeholder::{PatchBuffer, token};
use crate::project::project;

/// Caller options for example emission.
#[derive(Default)]
pub struct ExampleOptions<'a> {
    /// Custom literal provider, keyed by the member record. The returned
    /// text is spliced verbatim, so strings must come quoted. `None`
    /// falls back to the built-in default-by-kind table.
    pub value_provider: Option<&'a dyn Fn(&MemberInfo<'_>) -> Option<String>>,
}

/// Emit an example data instance for a schema, as raw JSON text.
///
/// The flattened sequence is consumed once, front to back. Container
/// nodes splice an open brace/bracket holding a placeholder for their
/// not-yet-visited children; primitives splice literals. Pass the result
/// through [`format_example`] for indented output.
pub fn emit_example(
    schema: &SchemaNode,
    separator: &str,
    root_name: &str,
    options: &ExampleOptions<'_>,
) -> Result<String> {
    let members = project(flatten(schema, separator, root_name)?.collect());

    // A bare primitive at the root short-circuits to a single literal.
    if members.len() == 1 && members[0].node.kind == TypeKind::Primitive {
        return literal(&members[0], options);
    }

    // Key of the last member of each parent group, for trailing-comma
    // suppression.
    let mut last_by_parent: HashMap<&str, &str> = HashMap::new();
    for member in &members {
        last_by_parent.insert(member.node.parent_key.as_str(), member.node.key.as_str());
    }

    let mut buffer = PatchBuffer::new();
    for member in &members {
        let node = &member.node;
        if member.is_root {
            match node.kind {
                TypeKind::Object => buffer.append(&format!("{{{}}}", token(&node.key))),
                TypeKind::Array => buffer.append(&format!("[{}]", token(&node.key))),
                TypeKind::Primitive => unreachable!("single-node sequences return above"),
            }
            continue;
        }

        let is_last =
            last_by_parent.get(node.parent_key.as_str()).copied() == Some(node.key.as_str());
        let comma = if is_last { "" } else { "," };
        let inside_array = member.parent_kind == Some(TypeKind::Array);

        let fragment = match node.kind {
            TypeKind::Object if inside_array => {
                format!("{{{}}}{}", token(&node.key), comma)
            }
            TypeKind::Object => {
                format!("{}: {{{}}}{}", quote(&node.name), token(&node.key), comma)
            }
            TypeKind::Array if inside_array => {
                format!("[{}]{}", token(&node.key), comma)
            }
            TypeKind::Array => {
                format!("{}: [{}]{}", quote(&node.name), token(&node.key), comma)
            }
            TypeKind::Primitive if inside_array => {
                format!("{}{}", literal(member, options)?, comma)
            }
            TypeKind::Primitive => {
                format!("{}: {}{}", quote(&node.name), literal(member, options)?, comma)
            }
        };
        buffer.splice(&node.parent_key, &fragment);
    }
    Ok(buffer.finish())
}

fn literal(member: &MemberInfo<'_>, options: &ExampleOptions<'_>) -> Result<String> {
    if let Some(provider) = options.value_provider {
        if let Some(value) = provider(member) {
            return Ok(value);
        }
    }
    Ok(resolve_value_kind(member.node.schema)?
        .default_literal()
        .to_string())
}

fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for ch in name.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Pretty-print raw example text.
///
/// Lexical, two phases: strip all whitespace outside string literals,
/// then re-emit with line breaks and two-space indentation. Formatting
/// already-formatted text yields the same text.
pub fn format_example(raw: &str) -> String {
    let compact = minify(raw);
    let mut out = String::with_capacity(compact.len() * 2);
    let mut depth: usize = 0;
    let mut chars = compact.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    let newline = |out: &mut String, depth: usize| {
        out.push('\n');
        for _ in 0..depth {
            out.push_str("  ");
        }
    };

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '{' | '[' => {
                let closer = if ch == '{' { '}' } else { ']' };
                if chars.peek() == Some(&closer) {
                    out.push(ch);
                    out.push(closer);
                    chars.next();
                } else {
                    out.push(ch);
                    depth += 1;
                    newline(&mut out, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(ch);
            }
            ',' => {
                out.push(ch);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            _ => out.push(ch),
        }
    }
    out
}

fn minify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;
    for ch in raw.chars() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}
