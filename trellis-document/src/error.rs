//! Document-level errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for trellis-document operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The document text is not valid JSON/YAML for the expected shape.
    #[error("failed to parse {format} document")]
    #[diagnostic(code(trellis::document::parse))]
    Parse {
        format: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    pub(crate) fn parse_json(src: &str, filename: &str, source: serde_json::Error) -> Self {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Self::Parse {
            format: "JSON",
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.to_string(),
        }
    }

    pub(crate) fn parse_yaml(src: &str, filename: &str, source: serde_yaml::Error) -> Self {
        let span = source
            .location()
            .map(|location| SourceSpan::from(location.index()));
        Self::Parse {
            format: "YAML",
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.to_string(),
        }
    }
}

/// Byte offset of a 1-based line/column position; `None` when the
/// parser reported no position.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len() + 1;
    }
    None
}
