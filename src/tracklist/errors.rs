use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a tracklist
#[derive(Error, Debug)]
pub enum Error {
    /// The drop list could not be opened
    #[error("Failed to open {path:?}: {source}")]
    InputOpen {
        /// File involved
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Reading the drop list failed mid-stream
    #[error("Failed to read {path:?}: {source}")]
    InputRead {
        /// File involved
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// A line lacks the " - " separator. Recoverable, the line is skipped.
    #[error("Malformed record, expected \"Artist - Track\": {0}")]
    MalformedLine(String),

    /// No track pairs were found
    #[error("No track pairs found in {0:?} to build a tracklist from")]
    EmptyInput(PathBuf),

    /// The tracklist could not be created, written or flushed
    #[error("Failed to write tracklist to {path:?}: {source}")]
    OutputWrite {
        /// File involved
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
}

/// Result alias used across the tracklist modules
pub type Result<T> = std::result::Result<T, Error>;
