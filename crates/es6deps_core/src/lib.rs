//! Core dependency resolution for es6deps.
//!
//! This crate computes the transitive closure of ES module imports starting
//! from a source file:
//! - Canonicalizing textual paths without touching the filesystem
//! - Extracting import specifiers from JS/TS files
//! - Resolving specifiers to local sources or opaque externals
//! - Walking the import graph without looping on cycles

mod canonical;
mod constants;
mod error;
mod node;
mod parser;
mod types;
mod walker;

// Re-export public API
pub use canonical::{canonical, join};
pub use constants::{DEFAULT_SUFFIX, SEPARATOR};
pub use error::{Error, Result};
pub use node::{External, Node, Source};
pub use parser::{imports_for, parse_imports};
pub use types::{DependencySet, SpecKind, Specifier};
pub use walker::{Walker, walk};
