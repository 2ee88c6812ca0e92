//! ecoscan-api library interface
//!
//! Exposes the router and services for the binary and for integration tests.

pub mod api;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use ecoscan_common::config::ExternalLookupConfig;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::openfoodfacts_client::OffError;
use crate::services::{OfflineSource, OpenFoodFactsClient, ProductSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// External product source consulted by search
    pub product_source: Arc<dyn ProductSource>,
    /// Scan history database; `None` when persistence is disabled
    pub db: Option<SqlitePool>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(product_source: Arc<dyn ProductSource>, db: Option<SqlitePool>) -> Self {
        Self {
            product_source,
            db,
            startup_time: Utc::now(),
        }
    }

    /// State with no external lookups and no database
    pub fn offline() -> Self {
        Self::new(Arc::new(OfflineSource), None)
    }
}

/// Build the product source described by the configuration
pub fn product_source_from_config(
    config: &ExternalLookupConfig,
) -> Result<Arc<dyn ProductSource>, OffError> {
    if config.enabled {
        Ok(Arc::new(OpenFoodFactsClient::new(config)?))
    } else {
        Ok(Arc::new(OfflineSource))
    }
}

/// Build application router
///
/// Cross-origin requests are allowed from anywhere, credentials included.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::scan_routes())
        .merge(api::search_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
