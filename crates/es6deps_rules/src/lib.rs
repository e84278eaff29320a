//! Makefile dependency rules for ES module trees.
//!
//! This crate turns the reachable-source sets computed by `es6deps_core`
//! into build-system input: it unions the closures of several entry files,
//! optionally grafts them onto an output directory, and renders either
//! Makefile rules or a plain dependency map.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use es6deps_rules::{Config, run};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["es6deps", "--target", "app.min.js", "src/main.js"]);
//! let deps = run(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! es6deps_rules::write_rules(&mut stdout, &cfg.targets, &deps)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod reporter;
mod runner;
mod types;

// Re-export public API
pub use builder::{Graft, build_dependency_set};
pub use config::Config;
pub use reporter::{quote, write_dependencies, write_rules};
pub use runner::run;
pub use types::OutputMode;
