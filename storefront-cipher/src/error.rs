//! Error types for password decoding.

use thiserror::Error;

/// Result type for cipher operations.
pub type CipherResult<T> = Result<T, CipherError>;

/// Format errors raised when a stored value is not a valid encoded password.
///
/// Callers treat every variant as "legacy or incompatible record" and apply
/// their own fallback policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Shorter than the markers plus one encoded character.
    #[error("encoded password too short: {len} characters")]
    TooShort { len: usize },

    /// Does not start with the `^^` marker.
    #[error("encoded password is missing the leading marker")]
    MissingPrefix,

    /// Does not end with the `$$` marker.
    #[error("encoded password is missing the trailing marker")]
    MissingSuffix,

    /// Body between the markers is not made of 3-character blocks.
    #[error("encoded password body has {len} characters, not a multiple of 3")]
    MisalignedBody { len: usize },
}
