//! Storefront operations over the user, product and order files.
//!
//! [`Shop`] is the composition root: it opens one store per file named in
//! [`ShopConfig`] and hands them to the facades. Facades validate input
//! before touching any file and report failures as [`ShopError`].

mod admin;
mod config;
mod customer;
mod error;
mod identity;
mod order;
mod product;
mod shop;
mod stats;

pub use admin::AdminOperations;
pub use config::ShopConfig;
pub use customer::{CustomerOperations, ProfileField};
pub use error::{ShopError, ShopResult};
pub use identity::{BOOTSTRAP_ADMIN_NAME, BOOTSTRAP_ADMIN_PASSWORD, IdentityOperations, MAX_ID_ATTEMPTS, Session};
pub use order::{OrderOperations, OrderScope, TEST_CUSTOMER_IDS, TEST_ORDER_YEAR, TEST_ORDERS_PER_CUSTOMER};
pub use product::ProductOperations;
pub use shop::{ResetSummary, Shop};
pub use stats::{DEFAULT_TOP_SELLERS, DiscountBuckets, SellerCount, Statistics};
