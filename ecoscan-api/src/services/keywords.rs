//! Keyword heuristics over free-text queries

const BASE_SCORE: i32 = 50;
const POSITIVE_WEIGHT: i32 = 15;
const NEGATIVE_WEIGHT: i32 = 20;

const POSITIVE_KEYWORDS: &[&str] = &[
    "organic",
    "eco",
    "green",
    "sustainable",
    "recycled",
    "biodegradable",
    "renewable",
    "fair trade",
    "local",
    "natural",
    "plant-based",
    "vegan",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "plastic",
    "disposable",
    "single-use",
    "toxic",
    "chemical",
    "synthetic",
    "artificial",
    "processed",
    "industrial",
    "mass-produced",
];

/// Category buckets, tested in order; first hit wins
const CATEGORY_BUCKETS: &[(&str, &[&str])] = &[
    ("food", &["food", "drink", "beverage", "snack", "cereal", "organic"]),
    ("electronics", &["phone", "computer", "laptop", "tablet", "electronic"]),
    ("clothing", &["clothes", "shoes", "shirt", "pants", "dress"]),
    ("automotive", &["car", "vehicle", "automotive", "tesla"]),
];

const FALLBACK_CATEGORY: &str = "general";

/// Sustainability score in [0, 100] from keywords found in `text`
///
/// Base 50, +15 per positive keyword present, -20 per negative keyword present.
/// Matching is by substring on the text as given; callers lowercase first.
pub fn score_from_keywords(text: &str) -> u32 {
    let positives = POSITIVE_KEYWORDS.iter().filter(|k| text.contains(*k)).count() as i32;
    let negatives = NEGATIVE_KEYWORDS.iter().filter(|k| text.contains(*k)).count() as i32;

    let score = BASE_SCORE + positives * POSITIVE_WEIGHT - negatives * NEGATIVE_WEIGHT;
    score.clamp(0, 100) as u32
}

/// Product category guessed from a (lowercased) query
pub fn determine_category(query: &str) -> &'static str {
    CATEGORY_BUCKETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}
