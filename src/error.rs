//! Error type for the profiling library.

use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors surfaced by table parsing, resource loading, and output writing.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("bad lexicon entry at line {line}: {reason}")]
    Lexicon { line: usize, reason: String },

    #[error("bad synset entry at line {line}: {reason}")]
    Wordnet { line: usize, reason: String },
}

impl ProfileError {
    /// True when the underlying cause is a missing file. The entry point
    /// treats a missing input table as a logged, recoverable condition
    /// rather than a failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(err) => err.kind() == io::ErrorKind::NotFound,
            Self::Csv(err) => {
                matches!(err.kind(), csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound)
            }
            _ => false,
        }
    }
}
