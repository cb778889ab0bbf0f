//! Lexical formatter for raw TypeScript declaration text.

use trellis_codegen::builder::{CodeBuilder, Indent};

/// Re-emit raw TypeScript text with K&R braces and two-space
/// indentation. Splits on `{`, `}` and `;`; blank lines separate
/// top-level declarations. Idempotent.
pub(crate) fn format(raw: &str) -> String {
    let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
    let mut fragment = String::new();
    let mut depth: usize = 0;

    for ch in raw.chars() {
        match ch {
            '{' => {
                let header = collapse(&fragment);
                fragment.clear();
                builder.push_line(&format!("{header} {{")).push_indent();
                depth += 1;
            }
            '}' => {
                flush(&mut builder, &mut fragment);
                builder.push_dedent().push_line("}");
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    builder.push_blank();
                }
            }
            ';' => {
                let member = collapse(&fragment);
                fragment.clear();
                builder.push_line(&format!("{member};"));
            }
            _ => fragment.push(ch),
        }
    }
    flush(&mut builder, &mut fragment);
    builder.build()
}

fn flush(builder: &mut CodeBuilder, fragment: &mut String) {
    let collapsed = collapse(fragment);
    if !collapsed.is_empty() {
        builder.push_line(&collapsed);
    }
    fragment.clear();
}

fn collapse(fragment: &str) -> String {
    fragment.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_single_interface() {
        let raw = "export interface Root {id: number;tags: string[];}";
        let expected = "\
export interface Root {
  id: number;
  tags: string[];
}
";
        assert_eq!(format(raw), expected);
    }

    #[test]
    fn test_blank_line_between_declarations() {
        let raw = "export interface Root {owner: Owner;}export interface Owner {}";
        let expected = "\
export interface Root {
  owner: Owner;
}

export interface Owner {
}
";
        assert_eq!(format(raw), expected);
    }

    #[test]
    fn test_format_is_idempotent() {
        let raw = "export interface Root {id?: number | null;}export interface Owner {}";
        let once = format(raw);
        assert_eq!(format(&once), once);
    }
}
