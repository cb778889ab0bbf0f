//! Placeholder tokens and the splice buffer the emitters share.
//!
//! An emitter visits the flattened sequence front to back, keeping one
//! mutable text buffer. Content whose children have not been visited yet
//! is represented by a placeholder token keyed by the node's key; when a
//! child arrives, the first occurrence of its parent's token is replaced
//! by the child's fragment plus a fresh copy of the token, so later
//! siblings still find an insertion point immediately after it.

/// Token delimiters. Guillemets cannot occur in schema property names or
/// separators produced by this pipeline, so a token match is exact.
const OPEN: char = '\u{2039}';
const CLOSE: char = '\u{203A}';

/// The placeholder token for a node key.
pub(crate) fn token(key: &str) -> String {
    format!("{OPEN}{key}{CLOSE}")
}

/// A text buffer with deferred-content placeholders.
#[derive(Debug, Default)]
pub(crate) struct PatchBuffer {
    text: String,
}

impl PatchBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a fragment at the end of the buffer.
    pub(crate) fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Replace the FIRST occurrence of `key`'s token with `fragment`
    /// followed by a fresh token. Replacing only the first occurrence is
    /// load-bearing: siblings land adjacent, in visitation order, and are
    /// never duplicated across insertion points.
    ///
    /// Returns false when the token is not present.
    pub(crate) fn splice(&mut self, key: &str, fragment: &str) -> bool {
        let tok = token(key);
        let Some(position) = self.text.find(&tok) else {
            return false;
        };
        let mut replacement = String::with_capacity(fragment.len() + tok.len());
        replacement.push_str(fragment);
        replacement.push_str(&tok);
        self.text.replace_range(position..position + tok.len(), &replacement);
        true
    }

    /// Strip every remaining token span and return the finished text.
    /// Leftover tokens are expected: objects without properties and
    /// arrays whose item type contributed nothing leave theirs behind.
    pub(crate) fn finish(self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut in_token = false;
        for ch in self.text.chars() {
            match ch {
                OPEN => in_token = true,
                CLOSE => in_token = false,
                _ if in_token => {}
                _ => out.push(ch),
            }
        }
        out
    }
}
