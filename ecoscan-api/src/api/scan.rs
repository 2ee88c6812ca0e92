//! Barcode scoring endpoints
//!
//! GET and POST share the same deterministic score function, so both return
//! identical results for the same barcode.

use axum::{extract::Query, routing::get, Json, Router};
use ecoscan_common::ScanResult;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::services::score::scan;
use crate::AppState;

/// Query parameters for GET /api/scan
#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Body for POST /api/scan
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub barcode: String,
}

/// GET /api/scan?barcode=012345
///
/// Missing or empty barcode is a 400.
pub async fn scan_get(Query(query): Query<ScanQuery>) -> ApiResult<Json<ScanResult>> {
    let barcode = query
        .barcode
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ApiError::BadRequest("barcode query parameter is required".to_string()))?;

    let result = scan(barcode);
    debug!(barcode = %result.barcode, score = result.score, "Scored barcode");
    Ok(Json(result))
}

/// POST /api/scan with `{"barcode": "..."}`
///
/// An empty barcode is accepted and scores 0.
pub async fn scan_post(Json(request): Json<ScanRequest>) -> Json<ScanResult> {
    let result = scan(request.barcode);
    debug!(barcode = %result.barcode, score = result.score, "Scored barcode");
    Json(result)
}

/// Build scan routes
pub fn scan_routes() -> Router<AppState> {
    Router::new().route("/api/scan", get(scan_get).post(scan_post))
}
