//! Error surface of the store. Every operation reports one of these kinds
//! synchronously; nothing is retried and nothing is swallowed.

use thiserror::Error;

/// Failure modes the store can report to its caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed a field constraint before any write happened.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The targeted record id does not exist.
    #[error("no record with id {id}")]
    NotFound { id: i64 },

    /// The backing SQLite store could not complete the operation.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the store's own files, for
    /// example creating the data directory.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The export destination could not be written. A partially written
    /// file may remain; callers should treat a failed export as requiring
    /// a full retry.
    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

/// Shorthand used throughout the library surface.
pub type Result<T> = std::result::Result<T, StoreError>;
