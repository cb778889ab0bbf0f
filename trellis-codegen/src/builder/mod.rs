//! Building blocks for the raw-text formatters.
//!
//! - [`CodeBuilder`] - line assembly with tracked indentation
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
