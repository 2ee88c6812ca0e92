//! Database models

use crate::models::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// Row of the `scans` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScanRecord {
    pub id: i64,
    pub barcode: String,
    pub score: i64,
    /// Stored as JSON text
    pub breakdown: Json<ScoreBreakdown>,
}
