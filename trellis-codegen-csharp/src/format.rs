//! Lexical formatter for raw C# declaration text.

use trellis_codegen::builder::{CodeBuilder, Indent};

const ACCESSORS: &str = "{ get; set; }";
// Stand-in for accessor groups while braces are treated structurally
const ACCESSOR_MARK: char = '\u{1}';

/// Re-emit raw C# text with Allman braces and four-space indentation.
///
/// The braces of `{ get; set; }` accessor groups are not structural;
/// they are protected before splitting and restored afterwards. Blank
/// lines separate top-level declarations. Idempotent.
pub(crate) fn format(raw: &str) -> String {
    let protected = raw.replace(ACCESSORS, &ACCESSOR_MARK.to_string());
    let mut builder = CodeBuilder::new(Indent::CSHARP);
    let mut fragment = String::new();
    let mut depth: usize = 0;

    for ch in protected.chars() {
        match ch {
            '{' => {
                flush(&mut builder, &mut fragment);
                builder.push_line("{").push_indent();
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
            ACCESSOR_MARK => {
                let line = format!("{} {}", collapse(&fragment), ACCESSORS);
                builder.push_line(line.trim_start());
                fragment.clear();
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
