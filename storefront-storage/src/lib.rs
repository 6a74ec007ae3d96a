//! Flat-file storage for the storefront.
//!
//! Each entity type lives in its own UTF-8 text file with one JSON object
//! per line.
//!
//! # Architecture
//!
//! - [`LineRecordStore`] works on untyped [`Record`](storefront_model::Record)s:
//!   append, full scans, predicate filters and whole-file rewrites
//! - [`EntityStore`] layers a [`FieldCodec`](storefront_model::FieldCodec) on
//!   top so callers deal in `User`, `Product` and `Order`
//! - [`paginate`] slices any ordered result set into 1-based pages
//!
//! Lines that cannot be parsed never fail an operation. Reads skip them with
//! a warning and targeted rewrites preserve them.

mod error;
mod page;
mod store;
mod typed;

pub use error::{StorageError, StorageResult};
pub use page::{DEFAULT_PAGE_SIZE, Page, PageWindow, paginate};
pub use store::{LineRecordStore, ScannedLine};
pub use typed::EntityStore;
