//! Errors surfaced at the edges of the engine.
//!
//! Analysing text never fails. Everything here comes from setting up the grammar,
//! touching the filesystem, or loading configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure modes of the analyzer's collaborators.
pub enum Error {
    /// The document could not be read from disk.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// A result file could not be written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// Destination that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The tree-sitter grammar is incompatible with the linked runtime.
    #[error("markdown grammar unavailable: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// A structural query failed to compile against the grammar.
    #[error("invalid structure query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// The configuration file exists but could not be parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file that was parsed.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// Serialising a result to JSON failed.
    #[error("could not serialise result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
