//! In-Memory Product Store
//!
//! For development, demos and tests. Can be switched offline to exercise the
//! fail-open path without a database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::{Result, StoreError};
use crate::model::{Product, ProductQuery};

/// In-memory product catalog
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
    online: AtomicBool,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProductStore {
    /// Empty, reachable store
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            online: AtomicBool::new(true),
        }
    }

    /// Store that fails every query, like a database that isn't there
    pub fn offline() -> Self {
        let store = Self::new();
        store.set_online(false);
        store
    }

    /// Store seeded with a small demo catalog
    pub fn demo() -> Self {
        Self::with_products(demo_catalog())
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub async fn insert(&self, product: Product) {
        self.products.write().await.push(product);
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_many(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }

        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| query.matches(p))
            .take(query.limit)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "MemoryStore"
    }
}

fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("demo-kettle", "Electric Kettle 1.7L", "https://picsum.photos/seed/kettle/400/300", dec!(14.99), dec!(19.99)).featured(),
        Product::new("demo-headphones", "Wireless Over-Ear Headphones", "https://picsum.photos/seed/headphones/400/300", dec!(39.99), dec!(79.99)).featured(),
        Product::new("demo-lamp", "LED Desk Lamp", "https://picsum.photos/seed/lamp/400/300", dec!(12.50), dec!(12.50)).featured(),
        Product::new("demo-backpack", "Commuter Backpack", "https://picsum.photos/seed/backpack/400/300", dec!(29.00), dec!(45.00)).featured(),
        Product::new("demo-mug", "Insulated Travel Mug", "https://picsum.photos/seed/mug/400/300", dec!(8.99), dec!(11.99)).featured(),
        Product::new("demo-charger", "65W USB-C Charger", "https://picsum.photos/seed/charger/400/300", dec!(19.99), dec!(34.99)).featured(),
        Product::new("demo-blender", "Personal Blender", "https://picsum.photos/seed/blender/400/300", dec!(24.99), dec!(39.99)),
        Product::new("demo-socks", "Wool Hiking Socks (3 pack)", "https://picsum.photos/seed/socks/400/300", dec!(9.99), dec!(17.99)).featured(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn featured(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product::new(format!("p{i}"), format!("Product {i}"), "/img.png", dec!(10), dec!(20)).featured())
            .collect()
    }

    #[tokio::test]
    async fn test_filters_featured() {
        let store = MemoryProductStore::new();
        store.insert(Product::new("plain", "Plain", "/p.png", dec!(1), dec!(1))).await;
        store.insert(Product::new("star", "Star", "/s.png", dec!(1), dec!(2)).featured()).await;

        let found = store.find_many(&ProductQuery::featured(8)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "star");
    }

    #[tokio::test]
    async fn test_respects_limit_and_order() {
        let store = MemoryProductStore::with_products(featured(12));

        let found = store.find_many(&ProductQuery::featured(8)).await.unwrap();
        let ids: Vec<_> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7"]);
    }

    #[tokio::test]
    async fn test_offline_store_fails() {
        let store = MemoryProductStore::offline();
        let result = store.find_many(&ProductQuery::featured(8)).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert!(!store.health_check().await);

        store.set_online(true);
        assert!(store.find_many(&ProductQuery::featured(8)).await.is_ok());
    }

    #[tokio::test]
    async fn test_demo_catalog() {
        let store = MemoryProductStore::demo();
        assert!(!store.is_empty().await);

        let found = store.find_many(&ProductQuery::featured(8)).await.unwrap();
        assert!(found.iter().all(|p| p.featured));
        assert!(found.len() < store.len().await);
    }
}
