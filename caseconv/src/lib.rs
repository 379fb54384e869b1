//! Identifier case conversion.
//!
//! This crate converts free-form text between start case, PascalCase,
//! camelCase, kebab-case, snake_case and CONSTANT_CASE. Word boundaries are
//! always re-derived from the spaces, dashes and underscores in the input;
//! the input's current casing is never inspected.
//!
//! # Architecture
//!
//! ```text
//! input → primitive transforms (chained by a Pipeline) → cased output
//! ```
//!
//! Every conversion is a pure function. Empty input converts to the empty
//! string, and runs of delimiters are preserved rather than collapsed.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod case;
mod convention;
mod error;
mod pipeline;
pub mod transform;

// Case conversion
pub use case::{
    Case, to_camel_case, to_constant_case, to_kebab_case, to_pascal_case, to_snake_case,
    to_start_case,
};
// Configuration
pub use convention::{DEFAULT_FILENAME, NamingConvention, Role};
pub use error::{Error, Result};
// Composition
pub use pipeline::{Pipeline, compose};
pub use transform::Transform;
