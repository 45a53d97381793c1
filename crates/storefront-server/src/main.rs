//! Storefront HTTP Server
//!
//! Axum-based server providing the featured products API and serving the
//! compiled landing page frontend.

mod config;
mod handlers;
mod state;

use std::time::Duration;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{featured_products, health_check};
use crate::state::AppState;

const STARTUP_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if config.database_url.is_none() {
        tracing::warn!("⚠ DATABASE_URL not set - using in-memory catalog");
        if config.seed_demo_products {
            tracing::info!("  Seeded demo products");
        } else {
            tracing::warn!("  Set SEED_DEMO_PRODUCTS=true for demo data");
        }
    }

    let state = AppState::from_config(&config);

    // Startup check only; the page still renders with the store down
    let reachable = tokio::time::timeout(STARTUP_CHECK_TIMEOUT, state.store.health_check())
        .await
        .unwrap_or(false);
    if reachable {
        tracing::info!("✓ Connected to {} store", state.store.name());
    } else {
        tracing::warn!("⚠ {} store not reachable - landing page will show no deals", state.store.name());
    }

    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🛒 storefront running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  GET  /api/products/featured - Featured product cards");
    tracing::info!("  GET  /                      - Landing page ({})", config.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn build_router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/products/featured", get(featured_products))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}
