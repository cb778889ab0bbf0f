//! Dialect abstraction for declaration emission.
//!
//! Both output dialects share one emitter; everything dialect-specific
//! (type tokens, member syntax, declaration syntax, formatting) sits
//! behind the [`Dialect`] trait, implemented by the backend crates.

use trellis_core::ValueKind;
use trellis_ir::MemberInfo;

/// How array-typed members are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayStyle {
    /// Generic collection (`List<T>`, `Array<T>`).
    #[default]
    Collection,
    /// Array-native (`T[]`).
    Native,
}

/// How date/date-time values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// The dialect's temporal type (`DateTime`, `Date`).
    #[default]
    Temporal,
    /// Plain string, for wire-format fidelity.
    Text,
}

/// Plural words that stay plural when deriving type names. Extend or
/// replace via [`DeclareOptions::keep_singular`].
pub const DEFAULT_KEEP_SINGULAR: &[&str] = &["data", "media", "news", "series", "species"];

/// Caller options for declaration emission.
pub struct DeclareOptions<'a> {
    /// Name of the root declaration.
    pub name: String,

    /// Mark members not in the required set as nullable.
    pub nullable: bool,

    pub array_style: ArrayStyle,

    pub date_style: DateStyle,

    /// Words exempt from singularization when deriving type names from
    /// property names.
    pub keep_singular: Vec<String>,

    /// Override hook for member type tokens: receives the member record
    /// and the token the emitter resolved; returning `Some` replaces it.
    pub type_replacer: Option<&'a dyn Fn(&MemberInfo<'_>, &str) -> Option<String>>,
}

impl DeclareOptions<'_> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            array_style: ArrayStyle::default(),
            date_style: DateStyle::default(),
            keep_singular: DEFAULT_KEEP_SINGULAR.iter().map(|s| s.to_string()).collect(),
            type_replacer: None,
        }
    }
}

/// One output dialect: syntax for declarations and members, stage two of
/// type mapping, and the raw-text formatter.
pub trait Dialect {
    /// Dialect identifier (e.g. "csharp", "typescript").
    fn name(&self) -> &'static str;

    /// Concrete type token for a semantic value kind.
    fn value_type(&self, kind: ValueKind, options: &DeclareOptions<'_>) -> &'static str;

    /// Collection type over an element token.
    fn collection_type(&self, element: &str, options: &DeclareOptions<'_>) -> String;

    /// One member inside a declaration body, self-delimited.
    fn member(
        &self,
        name: &str,
        type_token: &str,
        required: bool,
        options: &DeclareOptions<'_>,
    ) -> String;

    /// A named declaration wrapping a body fragment.
    fn declaration(&self, type_name: &str, body: &str) -> String;

    /// Re-emit raw emitted text with dialect line breaks and indentation.
    /// Lexical only; assumes the input is well-formed per the emitter's
    /// own grammar. Idempotent.
    fn format(&self, raw: &str) -> String;
}
