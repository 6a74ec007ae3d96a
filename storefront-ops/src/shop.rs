use crate::admin::AdminOperations;
use crate::config::ShopConfig;
use crate::customer::CustomerOperations;
use crate::error::ShopResult;
use crate::identity::IdentityOperations;
use crate::order::OrderOperations;
use crate::product::ProductOperations;
use crate::stats::Statistics;
use storefront_model::{Order, Product, User};
use storefront_storage::EntityStore;
use tracing::info;

/// What [`Shop::reset`] left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSummary {
    /// Admin accounts kept in the users file.
    pub admins_kept: usize,
}

/// Every facade wired to the files named by one [`ShopConfig`].
#[derive(Debug, Clone)]
pub struct Shop {
    config: ShopConfig,
    identity: IdentityOperations,
    admins: AdminOperations,
    customers: CustomerOperations,
    products: ProductOperations,
    orders: OrderOperations,
    stats: Statistics,
}

impl Shop {
    pub fn open(config: ShopConfig) -> Self {
        let users: EntityStore<User> = EntityStore::open(config.users_path());
        let products: EntityStore<Product> = EntityStore::open(config.products_path());
        let orders: EntityStore<Order> = EntityStore::open(config.orders_path());
        let page_size = config.effective_page_size();

        let identity = IdentityOperations::new(users.clone());
        Self {
            admins: AdminOperations::new(users.clone(), identity.clone()),
            customers: CustomerOperations::new(users, identity.clone(), page_size),
            products: ProductOperations::new(products.clone(), page_size),
            orders: OrderOperations::new(orders.clone(), products.clone(), page_size),
            stats: Statistics::new(products, orders),
            identity,
            config,
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn identity(&self) -> &IdentityOperations {
        &self.identity
    }

    pub fn admins(&self) -> &AdminOperations {
        &self.admins
    }

    pub fn customers(&self) -> &CustomerOperations {
        &self.customers
    }

    pub fn products(&self) -> &ProductOperations {
        &self.products
    }

    pub fn orders(&self) -> &OrderOperations {
        &self.orders
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Deletes all orders, products and customers. Admins are kept.
    pub fn reset(&self) -> ShopResult<ResetSummary> {
        self.orders.delete_all_orders()?;
        self.products.delete_all_products()?;
        let admins_kept = self.customers.delete_all_customers()?;
        info!(admins_kept, "reset shop data");
        Ok(ResetSummary { admins_kept })
    }
}
