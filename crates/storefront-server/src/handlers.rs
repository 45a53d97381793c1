//! HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use storefront_core::{load_featured, LandingView, ProductCard};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
    pub store_connected: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeaturedResponse {
    pub products: Vec<ProductCard>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_connected = state.store.health_check().await;

    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        store: state.store.name().into(),
        store_connected,
    })
}

/// Featured products for the landing page
///
/// Always 200: a failing store yields an empty list, which the page shows
/// as "no deals yet".
pub async fn featured_products(State(state): State<AppState>) -> Json<FeaturedResponse> {
    let load = load_featured(state.store.as_ref()).await;
    let view = LandingView::from_load(&load);

    Json(FeaturedResponse {
        products: view.into_cards(),
    })
}
