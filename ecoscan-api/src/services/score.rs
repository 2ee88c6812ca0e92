//! Deterministic barcode score
//!
//! Stand-in for real impact data: the barcode's character codes are folded into
//! three bounded category costs, and the score is what remains of 100.

use ecoscan_common::{ScanResult, ScoreBreakdown};

const CARBON_MODULUS: u64 = 50;
const WATER_MODULUS: u64 = 30;
const OTHER_MODULUS: u64 = 20;

/// Compute `(score, breakdown)` for a barcode
///
/// Empty input scores 0 with an all-zero breakdown. Otherwise, with `s` the sum
/// of the character codes:
/// `carbon = (s*31) mod 50`, `water = (s*17) mod 30`, `other = (s*13) mod 20`,
/// `score = max(0, 100 - (carbon + water + other))`.
pub fn compute_score(barcode: &str) -> (u32, ScoreBreakdown) {
    if barcode.is_empty() {
        return (0, ScoreBreakdown::default());
    }

    let s: u64 = barcode.chars().map(|c| u64::from(u32::from(c))).sum();

    let breakdown = ScoreBreakdown {
        carbon: ((s * 31) % CARBON_MODULUS) as u32,
        water: ((s * 17) % WATER_MODULUS) as u32,
        other: ((s * 13) % OTHER_MODULUS) as u32,
    };
    let score = 100u32.saturating_sub(breakdown.total());

    (score, breakdown)
}

/// Score a barcode into the response record
pub fn scan(barcode: impl Into<String>) -> ScanResult {
    let barcode = barcode.into();
    let (score, breakdown) = compute_score(&barcode);
    ScanResult {
        barcode,
        score,
        breakdown,
    }
}
