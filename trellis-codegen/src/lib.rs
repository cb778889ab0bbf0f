//! Schema flattening and emitter core for the trellis code generator.
//!
//! The pipeline turns a nested schema tree into a linear sequence of
//! annotated records, then rebuilds correctly nested output text from
//! that sequence in a single forward pass with deferred placeholder
//! substitution:
//!
//! ```text
//! schema tree → flatten → FlatNode sequence → project → MemberInfo
//!     → emitter (example instance, or declarations via a Dialect)
//!     → raw text → formatter → final text
//! ```
//!
//! Each sequence is produced once per emit call and consumed exactly
//! once by exactly one emitter. Nothing is shared across calls, so the
//! whole crate is safe to use concurrently over an immutable tree.
//!
//! # Module Organization
//!
//! - [`builder`] - line assembly used by the raw-text formatters
//! - [`language`] - the [`Dialect`] abstraction and emission options

pub mod builder;
mod declare;
mod error;
mod example;
mod flatten;
pub mod language;
mod mapping;
mod placeholder;
mod project;

pub use declare::emit_declarations;
pub use error::{Error, Result};
pub use example::{ExampleOptions, emit_example, format_example};
pub use flatten::{DEFAULT_ROOT_NAME, DEFAULT_SEPARATOR, Flattener, flatten};
pub use language::{ArrayStyle, DEFAULT_KEEP_SINGULAR, DateStyle, DeclareOptions, Dialect};
pub use mapping::resolve_value_kind;
pub use project::project;
