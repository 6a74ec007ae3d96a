//! Read-only aggregates over the product and order files, used for charts
//! and the `stats` report.

use crate::error::{ShopError, ShopResult};
use crate::order::OrderScope;
use std::collections::HashMap;
use storefront_model::{FixedPoint, Order, Product};
use storefront_storage::EntityStore;

/// Number of best sellers reported when the caller does not choose.
pub const DEFAULT_TOP_SELLERS: usize = 10;

/// Product counts per discount band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountBuckets {
    /// Discount below 30 %.
    pub below_30: usize,
    /// Discount from 30 % to 60 % inclusive.
    pub from_30_to_60: usize,
    /// Discount above 60 %.
    pub above_60: usize,
}

impl DiscountBuckets {
    pub fn total(&self) -> usize {
        self.below_30 + self.from_30_to_60 + self.above_60
    }
}

/// One best-selling product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerCount {
    /// Product name, or the product id when the product is not in the catalogue.
    pub label: String,
    pub orders: usize,
}

#[derive(Debug, Clone)]
pub struct Statistics {
    products: EntityStore<Product>,
    orders: EntityStore<Order>,
}

impl Statistics {
    pub fn new(products: EntityStore<Product>, orders: EntityStore<Order>) -> Self {
        Self { products, orders }
    }

    /// Products per category, largest first. Ties keep category name order.
    pub fn category_counts(&self) -> ShopResult<Vec<(String, usize)>> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for product in self.products.scan()? {
            *counts.entry(product.category).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(counts)
    }

    pub fn discount_buckets(&self) -> ShopResult<DiscountBuckets> {
        let thirty = FixedPoint::from_units(30);
        let sixty = FixedPoint::from_units(60);
        let mut buckets = DiscountBuckets::default();
        for product in self.products.scan()? {
            if product.discount < thirty {
                buckets.below_30 += 1;
            } else if product.discount <= sixty {
                buckets.from_30_to_60 += 1;
            } else {
                buckets.above_60 += 1;
            }
        }
        Ok(buckets)
    }

    /// Total likes per category, smallest first.
    pub fn likes_by_category(&self) -> ShopResult<Vec<(String, u64)>> {
        let mut likes: HashMap<String, u64> = HashMap::new();
        for product in self.products.scan()? {
            *likes.entry(product.category).or_default() += product.likes_count;
        }
        let mut likes: Vec<_> = likes.into_iter().collect();
        likes.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Ok(likes)
    }

    /// `(discount, likes)` for every product, in file order.
    pub fn discount_likes_points(&self) -> ShopResult<Vec<(FixedPoint, u64)>> {
        Ok(self
            .products
            .scan()?
            .into_iter()
            .map(|p| (p.discount, p.likes_count))
            .collect())
    }

    /// Spend per calendar month (index 0 is January), priced at each
    /// product's current price. Orders for unknown products are skipped.
    /// A month whose total overflows fails with [`ShopError::Overflow`].
    pub fn monthly_consumption(&self, scope: &OrderScope) -> ShopResult<[FixedPoint; 12]> {
        let prices: HashMap<String, FixedPoint> = self
            .products
            .scan()?
            .into_iter()
            .map(|p| (p.id.to_string(), p.current_price))
            .collect();

        let mut months = [FixedPoint::ZERO; 12];
        for order in self.orders.filter(|order| scope.includes(order))? {
            let Some(price) = prices.get(order.product_id.as_str()) else {
                continue;
            };
            let slot = order.time.month() as usize - 1;
            months[slot] = months[slot]
                .checked_add(*price)
                .ok_or(ShopError::Overflow("monthly consumption"))?;
        }
        Ok(months)
    }

    /// The `n` most ordered products, most orders first.
    pub fn top_sellers(&self, n: usize) -> ShopResult<Vec<SellerCount>> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for order in self.orders.scan()? {
            *counts.entry(order.product_id.to_string()).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(n);

        let names: HashMap<String, String> = self
            .products
            .scan()?
            .into_iter()
            .map(|p| (p.id.to_string(), p.name))
            .collect();

        Ok(counts
            .into_iter()
            .map(|(id, orders)| SellerCount {
                label: names.get(&id).cloned().unwrap_or(id),
                orders,
            })
            .collect())
    }
}
