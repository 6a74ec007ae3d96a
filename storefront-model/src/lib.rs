//! Record model for the storefront line files.
//!
//! Defines the types every store and facade depends on:
//! - [`Record`]: one JSON line as an ordered list of scalar fields
//! - [`FieldValue`]: the string/number union a field may hold
//! - [`RecordSchema`]: an entity's required keys
//! - [`FieldCodec`]: two-way mapping between a typed entity and a record
//! - [`User`], [`Product`], [`Order`]: the stored entities
//!
//! Field-format checks for user input live in [`validation`].

mod codec;
mod error;
mod fixed;
mod order;
mod product;
mod record;
mod schema;
mod user;
mod value;
pub mod validation;

pub use codec::FieldCodec;
pub use error::{ModelError, ModelResult};
pub use fixed::FixedPoint;
pub use order::Order;
pub use product::Product;
pub use record::Record;
pub use schema::{CUSTOMER_SCHEMA, ORDER_SCHEMA, PRODUCT_SCHEMA, RecordSchema, USER_SCHEMA, keys};
pub use user::{Role, User};
pub use value::FieldValue;
