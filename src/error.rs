//! Error types for asort.
//!
//! Only two things can really go wrong: the file cannot be touched, or the document does not have
//! the shape the splitter expects. Lines lost to the legacy grouping rules are not errors; they
//! show up in the [`SortReport`](crate::report::SortReport) instead.

use crate::section::Boundary;
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
/// Everything that can stop a sort from completing.
pub enum Error {
    /// The document could not be read from or written to `path`.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        /// File that was being read or written.
        path: PathBuf,
        /// Underlying filesystem failure.
        #[source]
        source: std::io::Error,
    },

    /// A structural marker never appeared before the lines ran out.
    #[error("malformed document: boundary not found: {boundary}")]
    MalformedDocument {
        /// The marker the splitter was scanning for.
        boundary: Boundary,
    },

    /// A caller-supplied reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but could not be understood.
    #[error("invalid config {}: {message}", path.display())]
    Config {
        /// Config file that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl Error {
    /// Attach `path` to an I/O failure.
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
