use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while indexing a media library.
///
/// Filenames that no convention recognizes are not errors; they surface as
/// unparsed records in a [`BatchReport`](crate::batch::BatchReport).
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The discovery root does not exist or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A filesystem operation failed on the given path.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the CSV index failed.
    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

impl IndexerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for indexer operations.
pub type Result<T> = std::result::Result<T, IndexerError>;
