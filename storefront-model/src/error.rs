//! Error types for record parsing and entity decoding.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while turning a line into a record or a record into an entity.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The line is not a JSON object.
    #[error("malformed record line: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds something other than a string or a number.
    #[error("field {key:?} holds {found}, expected a string or number")]
    NonScalarField { key: String, found: &'static str },

    /// A required key is absent.
    #[error("{entity} record is missing field {key:?}")]
    MissingField {
        entity: &'static str,
        key: &'static str,
    },

    /// A field is present but cannot be interpreted.
    #[error("field {key:?} is invalid: {reason}")]
    InvalidField { key: &'static str, reason: String },
}
