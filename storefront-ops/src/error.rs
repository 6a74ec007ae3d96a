//! Error types for storefront operations.

use storefront_storage::StorageError;
use thiserror::Error;

/// Result type for storefront operations.
pub type ShopResult<T> = Result<T, ShopError>;

/// Errors returned by the operation facades.
///
/// Validation and conflict errors are raised before any file is touched.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A supplied value failed its format check.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The value collides with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An aggregate left the range of the money type.
    #[error("{0} total is too large to represent")]
    Overflow(&'static str),

    /// No record with the given id.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// Underlying file access failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ShopError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}
