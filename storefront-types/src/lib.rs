//! Core type definitions for the storefront record files.
//!
//! This crate defines the small value types shared by every layer:
//! - Prefixed entity identifiers (`u_…`, `p_…`, `o_…`)
//! - Record timestamps in the `dd-MM-yyyy_HH:mm:ss` on-disk format
//!
//! Entity structs and their line codecs live in `storefront-model`.

mod ids;
mod timestamp;

pub use ids::{OrderId, ProductId, UserId};
pub use timestamp::{RECORD_TIME_FORMAT, RecordTime};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing identifiers or timestamps.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {kind} id: {value:?}")]
    InvalidId { kind: &'static str, value: String },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
