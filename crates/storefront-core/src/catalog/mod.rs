//! Product Store Integration
//!
//! Abstraction over the relational product catalog plus its implementations.

mod memory;
#[cfg(feature = "postgres")]
mod postgres;

pub use memory::MemoryProductStore;
#[cfg(feature = "postgres")]
pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Product, ProductQuery};

/// Product store trait (Strategy pattern)
///
/// Read-only: nothing on the landing page path writes back to the catalog.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch products matching the query filter, at most `query.limit`
    ///
    /// Ordering is whatever the store returns.
    async fn find_many(&self, query: &ProductQuery) -> Result<Vec<Product>>;

    /// Check if the store is reachable
    async fn health_check(&self) -> bool;

    /// Store name
    fn name(&self) -> &str;
}
