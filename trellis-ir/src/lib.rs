//! Intermediate representation types for the trellis schema code generator.
//!
//! This crate provides the unified type definitions used across the
//! code generation pipeline. These types serve as the single source of
//! truth for the schema shapes flowing between components.
//!
//! # Architecture
//!
//! ```text
//! API document (JSON/YAML) → trellis-document (parsing) → trellis-ir (schema tree)
//!     → trellis-codegen (flattening, emission) → language backends
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no C#/TypeScript-specific concerns)
//! - Source-format agnostic (the same tree whether parsed from JSON or YAML)
//! - Cheap to inspect (flattened records keep a back-reference into the tree)

mod flat;
mod member;
mod schema;

pub use flat::FlatNode;
pub use member::MemberInfo;
pub use schema::{SchemaNode, TypeKind};
