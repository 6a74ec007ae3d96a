use crate::error::{ShopError, ShopResult};
use crate::identity::unique_id;
use rand::Rng;
use std::collections::HashSet;
use storefront_model::{Order, Product, keys};
use storefront_storage::{EntityStore, Page};
use storefront_types::{OrderId, ProductId, RecordTime, UserId};
use tracing::info;

/// Customers that receive generated test orders.
pub const TEST_CUSTOMER_IDS: std::ops::RangeInclusive<u64> = 2..=11;

/// Bounds on generated orders per test customer.
pub const TEST_ORDERS_PER_CUSTOMER: std::ops::RangeInclusive<usize> = 50..=200;

/// Year stamped on generated test orders.
pub const TEST_ORDER_YEAR: i32 = 2024;

/// Which orders a listing or aggregate covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderScope {
    All,
    Customer(UserId),
}

impl OrderScope {
    pub fn includes(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Customer(id) => order.user_id == *id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderOperations {
    orders: EntityStore<Order>,
    products: EntityStore<Product>,
    page_size: usize,
}

impl OrderOperations {
    pub fn new(orders: EntityStore<Order>, products: EntityStore<Product>, page_size: usize) -> Self {
        Self {
            orders,
            products,
            page_size,
        }
    }

    /// Records a purchase. `time` defaults to now.
    pub fn create_order(
        &self,
        customer_id: &UserId,
        product_id: &ProductId,
        time: Option<RecordTime>,
    ) -> ShopResult<Order> {
        let taken = self.taken_ids()?;
        let order = Order {
            id: unique_id("order", &taken, OrderId::generate)?,
            user_id: customer_id.clone(),
            product_id: product_id.clone(),
            time: time.unwrap_or_else(RecordTime::now),
        };
        self.orders.insert(&order)?;
        info!(order_id = %order.id, user_id = %customer_id, "created order");
        Ok(order)
    }

    pub fn delete_order(&self, order_id: &OrderId) -> ShopResult<()> {
        if !self.orders.delete_by_id(order_id.as_str())? {
            return Err(ShopError::not_found("order", order_id.as_str()));
        }
        info!(order_id = %order_id, "deleted order");
        Ok(())
    }

    pub fn list_orders(&self, scope: &OrderScope, page: usize) -> ShopResult<Page<Order>> {
        Ok(self
            .orders
            .filter_page(|order| scope.includes(order), page, self.page_size)?)
    }

    pub fn orders_in(&self, scope: &OrderScope) -> ShopResult<Vec<Order>> {
        Ok(self.orders.filter(|order| scope.includes(order))?)
    }

    pub fn delete_all_orders(&self) -> ShopResult<()> {
        self.orders.clear()?;
        info!("deleted all orders");
        Ok(())
    }

    /// Replaces all orders with random test data.
    ///
    /// Each test customer gets between 50 and 200 orders for random catalogue
    /// products at random times in 2024. With an empty catalogue the orders
    /// point at a placeholder product id. Returns the number of orders
    /// written.
    pub fn generate_test_orders<R: Rng>(&self, rng: &mut R) -> ShopResult<usize> {
        let mut product_ids: Vec<ProductId> = self.products.scan()?.into_iter().map(|p| p.id).collect();
        if product_ids.is_empty() {
            product_ids.push(placeholder_product_id()?);
        }

        let mut taken = HashSet::new();
        let mut generated = Vec::new();
        for customer in TEST_CUSTOMER_IDS {
            let user_id = UserId::from_number(customer);
            let count = rng.gen_range(TEST_ORDERS_PER_CUSTOMER);
            for _ in 0..count {
                let id = unique_id("order", &taken, || OrderId::generate_with(rng))?;
                taken.insert(id.to_string());
                generated.push(Order {
                    id,
                    user_id: user_id.clone(),
                    product_id: product_ids[rng.gen_range(0..product_ids.len())].clone(),
                    time: random_time(rng),
                });
            }
        }

        self.orders.replace_all(&generated)?;
        info!(orders = generated.len(), "generated test orders");
        Ok(generated.len())
    }

    fn taken_ids(&self) -> ShopResult<HashSet<String>> {
        Ok(self
            .orders
            .lines()
            .scan_all()?
            .into_iter()
            .filter_map(|line| line.record.get(keys::order::ID).map(|v| v.to_plain_string()))
            .collect())
    }
}

fn placeholder_product_id() -> ShopResult<ProductId> {
    ProductId::parse("p_dummy").map_err(|e| ShopError::validation(keys::order::PRODUCT_ID, e.to_string()))
}

fn random_time<R: Rng>(rng: &mut R) -> RecordTime {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);
    RecordTime::from_ymd_hms(TEST_ORDER_YEAR, month, day, hour, minute, second).unwrap_or_default()
}

