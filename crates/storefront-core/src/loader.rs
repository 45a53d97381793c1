//! Featured Product Loader
//!
//! Fetches the landing page products and fails open: a store error is logged
//! and becomes an empty result, so the page renders regardless.

use crate::catalog::ProductStore;
use crate::model::{Product, ProductQuery};

/// Maximum number of featured products on the landing page
pub const FEATURED_LIMIT: usize = 8;

/// Outcome of loading featured products
#[derive(Clone, Debug, PartialEq)]
pub enum FeaturedLoad {
    /// Store answered (possibly with zero products)
    Loaded(Vec<Product>),

    /// Store failed; the page shows the empty state
    Unavailable { reason: String },
}

impl FeaturedLoad {
    /// Products to render (empty when the store failed)
    pub fn products(&self) -> &[Product] {
        match self {
            FeaturedLoad::Loaded(products) => products,
            FeaturedLoad::Unavailable { .. } => &[],
        }
    }

    pub fn into_products(self) -> Vec<Product> {
        match self {
            FeaturedLoad::Loaded(products) => products,
            FeaturedLoad::Unavailable { .. } => Vec::new(),
        }
    }

    /// The store failed and the result was replaced with an empty one
    pub fn is_degraded(&self) -> bool {
        matches!(self, FeaturedLoad::Unavailable { .. })
    }
}

/// Load up to [`FEATURED_LIMIT`] featured products.
///
/// Never returns an error. No retry or timeout is applied here.
pub async fn load_featured(store: &dyn ProductStore) -> FeaturedLoad {
    match store.find_many(&ProductQuery::featured(FEATURED_LIMIT)).await {
        Ok(mut products) => {
            products.truncate(FEATURED_LIMIT);
            tracing::debug!(store = store.name(), count = products.len(), "Loaded featured products");
            FeaturedLoad::Loaded(products)
        }
        Err(e) => {
            tracing::error!(
                store = store.name(),
                unavailable = e.is_unavailable(),
                error = %e,
                "Database error loading featured products"
            );
            FeaturedLoad::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}
