//! Product search and suggestion endpoints

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use ecoscan_common::{Product, Suggestion};
use serde::Deserialize;
use tracing::debug;

use crate::services::{get_suggestions, search_products, SearchParams};
use crate::AppState;

/// Query parameters for GET /api/suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/search?q=&category=&brand=&sustainability=
///
/// All parameters optional. Returns the full ordered result list.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Product>> {
    let results = search_products(state.product_source.as_ref(), &params).await;
    debug!(
        q = %params.q,
        category = %params.category,
        brand = %params.brand,
        sustainability = %params.sustainability,
        count = results.len(),
        "Search complete"
    );
    Json(results)
}

/// GET /api/suggestions?q=
pub async fn suggestions(Query(query): Query<SuggestionQuery>) -> Json<Vec<Suggestion>> {
    Json(get_suggestions(&query.q))
}

/// Build search routes
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/suggestions", get(suggestions))
}
