//! Records exchanged over the HTTP API
//!
//! Every record is constructed for a single request, serialized, and dropped.
//! Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

/// Highest eco-score a product or scan can carry
pub const MAX_SCORE: u32 = 100;

/// Per-category impact contributions
///
/// Magnitudes are cost contributors (higher = worse), not independent measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub carbon: u32,
    pub water: u32,
    pub other: u32,
}

impl ScoreBreakdown {
    pub const fn new(carbon: u32, water: u32, other: u32) -> Self {
        Self { carbon, water, other }
    }

    /// Breakdown implied by a synthetic score
    ///
    /// `carbon = max(0, 50 - score)`, `water = max(0, 30 - score)`,
    /// `other = max(0, 20 - score)`.
    pub fn from_score(score: u32) -> Self {
        Self {
            carbon: 50u32.saturating_sub(score),
            water: 30u32.saturating_sub(score),
            other: 20u32.saturating_sub(score),
        }
    }

    /// Sum of all category contributions
    pub fn total(&self) -> u32 {
        self.carbon + self.water + self.other
    }
}

/// Result of scoring a barcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub barcode: String,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Greener alternative suggested for a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub score: u32,
}

impl Alternative {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score: score.min(MAX_SCORE),
        }
    }
}

/// Product returned by search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    /// Image URL, empty when none is known
    pub image: String,
    pub alternatives: Vec<Alternative>,
}

impl Product {
    /// Build a product with an explicit breakdown and no image or alternatives
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        score: u32,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            score: score.min(MAX_SCORE),
            breakdown,
            image: String::new(),
            alternatives: Vec::new(),
        }
    }

    /// Build a product whose breakdown is derived from its score
    ///
    /// Used for generated and externally sourced products, which carry no
    /// measured breakdown of their own.
    pub fn synthetic(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        score: u32,
    ) -> Self {
        let score = score.min(MAX_SCORE);
        Self::new(id, name, brand, category, score, ScoreBreakdown::from_score(score))
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_alternatives(mut self, alternatives: Vec<Alternative>) -> Self {
        self.alternatives = alternatives;
        self
    }
}

/// Search-as-you-type suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub brand: String,
}

/// Coarse score bucket used for filtering search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SustainabilityTier {
    /// score >= 80
    Excellent,
    /// 60 <= score < 80
    Good,
    /// 40 <= score < 60
    Fair,
    /// score < 40
    Poor,
}

impl SustainabilityTier {
    /// Parse a tier name; unknown names yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }

    /// Whether a score falls into this tier
    pub fn contains(&self, score: u32) -> bool {
        match self {
            Self::Excellent => score >= 80,
            Self::Good => (60..80).contains(&score),
            Self::Fair => (40..60).contains(&score),
            Self::Poor => score < 40,
        }
    }
}
