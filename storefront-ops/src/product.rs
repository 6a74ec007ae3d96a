use crate::error::{ShopError, ShopResult};
use storefront_model::{FixedPoint, Product};
use storefront_storage::{EntityStore, Page};
use storefront_types::ProductId;
use tracing::info;

/// Catalogue maintenance and lookup.
#[derive(Debug, Clone)]
pub struct ProductOperations {
    products: EntityStore<Product>,
    page_size: usize,
}

impl ProductOperations {
    pub fn new(products: EntityStore<Product>, page_size: usize) -> Self {
        Self { products, page_size }
    }

    /// Appends a product whose id is not on any line of the catalogue file,
    /// including lines that no longer decode.
    pub fn add_product(&self, product: &Product) -> ShopResult<()> {
        if self.products.contains_id(product.id.as_str())? {
            return Err(ShopError::Conflict(format!("product {} already exists", product.id)));
        }
        self.products.insert(product)?;
        info!(product_id = %product.id, "added product");
        Ok(())
    }

    /// Replaces the catalogue with the built-in sample product.
    pub fn load_sample_catalogue(&self) -> ShopResult<usize> {
        let sample = sample_products();
        self.products.replace_all(&sample)?;
        info!(products = sample.len(), "loaded sample catalogue");
        Ok(sample.len())
    }

    pub fn list_products(&self, page: usize) -> ShopResult<Page<Product>> {
        Ok(self.products.filter_page(|_| true, page, self.page_size)?)
    }

    /// Every product whose name contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> ShopResult<Vec<Product>> {
        let needle = keyword.to_lowercase();
        Ok(self
            .products
            .filter(|product| product.name.to_lowercase().contains(&needle))?)
    }

    pub fn get_product(&self, product_id: &ProductId) -> ShopResult<Option<Product>> {
        Ok(self.products.find_by_id(product_id.as_str())?)
    }

    pub fn all_products(&self) -> ShopResult<Vec<Product>> {
        Ok(self.products.scan()?)
    }

    pub fn delete_product(&self, product_id: &ProductId) -> ShopResult<()> {
        if !self.products.delete_by_id(product_id.as_str())? {
            return Err(ShopError::not_found("product", product_id.as_str()));
        }
        info!(product_id = %product_id, "deleted product");
        Ok(())
    }

    pub fn delete_all_products(&self) -> ShopResult<()> {
        self.products.clear()?;
        info!("deleted all products");
        Ok(())
    }
}

fn sample_products() -> Vec<Product> {
    vec![Product {
        id: ProductId::from_number(1),
        model: "ModelX".to_string(),
        category: "Electronics".to_string(),
        name: "Smartphone".to_string(),
        current_price: FixedPoint::from_hundredths(69999),
        raw_price: FixedPoint::from_hundredths(89999),
        discount: FixedPoint::from_units(20),
        likes_count: 150,
    }]
}
