use std::io;

use thiserror::Error;

/// Result type alias for dependency resolution.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while walking an import graph.
///
/// Every variant is fatal: the walker performs no recovery and the caller is
/// expected to fix the source tree and rerun.
#[derive(Debug, Error)]
pub enum Error {
    /// A source believed to exist could not be read.
    #[error("failed to read {location}: {source}")]
    UnreadableFile {
        /// Canonical location of the source.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
