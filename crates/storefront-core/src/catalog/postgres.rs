//! Postgres Product Store
//!
//! Reads the `"Product"` table. The schema and its migrations belong to the
//! catalog admin side; this store only issues `SELECT`s.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::ProductStore;
use crate::error::Result;
use crate::model::{Product, ProductQuery};

// Prices are cast to numeric so float-typed columns decode as Decimal too.
const FIND_MANY_SQL: &str = r#"
SELECT id,
       name,
       image,
       price::numeric AS price,
       "originalPrice"::numeric AS original_price,
       featured
FROM "Product"
WHERE ($1::boolean IS NULL OR featured = $1)
LIMIT $2
"#;

/// Postgres-backed product store
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a lazily-connecting pool
    ///
    /// No connection is opened here, so this succeeds while the database is
    /// down; failures show up on the first query instead.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_many(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);

        let products = sqlx::query_as::<_, Product>(FIND_MANY_SQL)
            .bind(query.featured)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = products.len(), "Fetched products from Postgres");
        Ok(products)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    fn name(&self) -> &str {
        "Postgres"
    }
}
