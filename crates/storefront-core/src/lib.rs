//! # storefront-core
//!
//! Featured product loading and the landing page view model for the
//! JargLarg storefront.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌────────────────────┐
//! │ ProductStore │───▶│ load_featured │───▶│ LandingView        │
//! │ (Strategy)   │    │ (fail-open)   │    │ Grid(cards) | Empty│
//! └──────────────┘    └───────────────┘    └────────────────────┘
//! ```
//!
//! A store failure never reaches the page: the loader logs it and hands the
//! view an empty collection, so the landing page always renders.
//!
//! ## Example
//!
//! ```rust,ignore
//! use storefront_core::{catalog::MemoryProductStore, load_featured, LandingView};
//!
//! let store = MemoryProductStore::demo();
//! let view = LandingView::from_load(&load_featured(&store).await);
//! ```

pub mod catalog;
pub mod discount;
pub mod error;
pub mod loader;
pub mod model;
pub mod view;

pub use discount::calculate_discount;
pub use error::{Result, StoreError};
pub use loader::{load_featured, FeaturedLoad, FEATURED_LIMIT};
pub use model::{Product, ProductQuery};
pub use view::{LandingView, ProductCard};
