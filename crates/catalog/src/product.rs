//! Product type and in-memory catalog.

use std::sync::Arc;

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A product offered by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Merchandising category.
    pub category: String,

    /// Units on hand.
    pub stock: u32,
}

impl Product {
    /// Creates a product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            stock,
        }
    }
}

/// In-memory product catalog.
///
/// Read-mostly; cheap to clone, all clones share the same backing store.
#[derive(Clone, Default)]
pub struct ProductCatalog {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with the demo inventory.
    pub fn with_seed_data() -> Self {
        let products = vec![
            Product::new(1u64, "Laptop", Money::from_cents(99_999), "Electronics", 15),
            Product::new(2u64, "Headphones", Money::from_cents(7_999), "Electronics", 50),
            Product::new(3u64, "Coffee Maker", Money::from_cents(4_999), "Home", 30),
            Product::new(4u64, "Running Shoes", Money::from_cents(8_999), "Sports", 25),
            Product::new(5u64, "Backpack", Money::from_cents(3_999), "Accessories", 40),
        ];
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Adds a product to the catalog.
    pub async fn add(&self, product: Product) {
        self.products.write().await.push(product);
    }

    /// Returns all products.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Returns products whose name contains the query, case-insensitively.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Looks up a product by ID.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Returns the number of products in the catalog.
    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_data_has_five_products() {
        let catalog = ProductCatalog::with_seed_data();
        assert_eq!(catalog.product_count().await, 5);
    }

    #[tokio::test]
    async fn get_returns_matching_product() {
        let catalog = ProductCatalog::with_seed_data();
        let laptop = catalog.get(ProductId::new(1)).await.unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.price.cents(), 99_999);
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let catalog = ProductCatalog::with_seed_data();
        assert!(catalog.get(ProductId::new(999)).await.is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let catalog = ProductCatalog::with_seed_data();

        let results = catalog.search("lap").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Laptop");

        let results = catalog.search("SHOES").await;
        assert_eq!(results.len(), 1);

        let results = catalog.search("xyz").await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_empty_query_matches_everything() {
        let catalog = ProductCatalog::with_seed_data();
        assert_eq!(catalog.search("").await.len(), 5);
    }

    #[tokio::test]
    async fn add_extends_catalog() {
        let catalog = ProductCatalog::new();
        catalog
            .add(Product::new(
                10u64,
                "Desk Lamp",
                Money::from_cents(2_499),
                "Home",
                12,
            ))
            .await;
        assert_eq!(catalog.product_count().await, 1);
    }

    #[test]
    fn product_serialization_round_trip() {
        let product = Product::new(2u64, "Headphones", Money::from_cents(7_999), "Electronics", 50);
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }
}
