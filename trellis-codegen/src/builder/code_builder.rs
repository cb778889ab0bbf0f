//! Line assembly with tracked indentation.

use super::Indent;

/// Accumulates lines of output at a tracked indentation level.
///
/// # Example
///
/// ```
/// use trellis_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::CSHARP);
/// builder
///     .push_line("public class Root")
///     .push_line("{")
///     .push_indent()
///     .push_line("public int Id { get; set; }")
///     .push_dedent()
///     .push_line("}");
/// assert!(builder.build().starts_with("public class Root\n{\n    public int Id"));
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new builder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line with the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase the indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease the indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Finish, trimming trailing blank lines down to one newline.
    pub fn build(self) -> String {
        let mut out = self.buffer;
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_lines() {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
        builder
            .push_line("export interface Root {")
            .push_indent()
            .push_line("id: number;")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            builder.build(),
            "export interface Root {\n  id: number;\n}\n"
        );
    }

    #[test]
    fn test_trailing_blanks_collapse() {
        let mut builder = CodeBuilder::new(Indent::CSHARP);
        builder.push_line("}").push_blank().push_blank();
        assert_eq!(builder.build(), "}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new(Indent::CSHARP);
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }
}
