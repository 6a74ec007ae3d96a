//! Error types for the storage layer.

use storefront_model::ModelError;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
///
/// A line that fails to parse is never an error here; scans skip it and
/// rewrites carry it over.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The finished temporary file could not replace the record file.
    #[error("could not replace record file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A record could not be serialized.
    #[error("record error: {0}")]
    Model(#[from] ModelError),
}
