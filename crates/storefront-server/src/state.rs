//! Application State

use std::sync::Arc;

use storefront_core::catalog::{MemoryProductStore, PgProductStore, ProductStore};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product catalog (Postgres, or in-memory when no database is configured)
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Pick the product store from configuration
    ///
    /// A bad `DATABASE_URL` is logged and replaced by an empty in-memory
    /// store so the landing page still comes up.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store: Arc<dyn ProductStore> = match &config.database_url {
            Some(url) => match PgProductStore::connect_lazy(url, config.max_connections) {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!("Invalid DATABASE_URL, falling back to empty catalog: {}", e);
                    Arc::new(MemoryProductStore::new())
                }
            },
            None if config.seed_demo_products => Arc::new(MemoryProductStore::demo()),
            None => Arc::new(MemoryProductStore::new()),
        };

        Self::new(store)
    }
}
