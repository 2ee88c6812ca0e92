//! Synthetic product variants for queries with no external match

use ecoscan_common::Product;

use super::keywords::{determine_category, score_from_keywords};

const VARIANT_SUFFIXES: &[&str] = &["Original", "Premium", "Eco-Friendly", "Organic", "Sustainable"];

const VARIANT_BRANDS: &[&str] = &["Generic", "EcoBrand", "GreenChoice", "SustainableCo", "EcoFriendly"];

/// Number of variants produced per query
pub const VARIANT_COUNT: usize = 3;

const GREEN_BONUS: u32 = 20;
const PREMIUM_BONUS: u32 = 10;

/// Generate up to three product variants named after the query
///
/// Each variant starts from the query's keyword score and gets +20 when its
/// name mentions eco/sustainable/organic, otherwise +10 when it mentions
/// premium. Category comes from the query's keyword bucket.
pub fn generate_products(query: &str) -> Vec<Product> {
    let query_lower = query.to_lowercase();
    let base_score = score_from_keywords(&query_lower);
    let category = determine_category(&query_lower);

    VARIANT_SUFFIXES
        .iter()
        .take(VARIANT_COUNT)
        .enumerate()
        .map(|(i, suffix)| {
            let name = format!("{} {}", query, suffix);
            let score = base_score + variant_bonus(&name);
            Product::synthetic(
                format!("dynamic_{}", i),
                name,
                VARIANT_BRANDS[i % VARIANT_BRANDS.len()],
                category,
                score,
            )
        })
        .collect()
}

fn variant_bonus(name: &str) -> u32 {
    let lower = name.to_lowercase();
    if ["eco", "sustainable", "organic"].iter().any(|k| lower.contains(k)) {
        GREEN_BONUS
    } else if lower.contains("premium") {
        PREMIUM_BONUS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoscan_common::ScoreBreakdown;

    #[test]
    fn test_neutral_query_variants() {
        let products = generate_products("bottle");
        assert_eq!(products.len(), 3);

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["bottle Original", "bottle Premium", "bottle Eco-Friendly"]);

        let scores: Vec<u32> = products.iter().map(|p| p.score).collect();
        assert_eq!(scores, [50, 60, 70]);

        let brands: Vec<&str> = products.iter().map(|p| p.brand.as_str()).collect();
        assert_eq!(brands, ["Generic", "EcoBrand", "GreenChoice"]);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["dynamic_0", "dynamic_1", "dynamic_2"]);

        assert!(products.iter().all(|p| p.category == "general"));
        assert!(products.iter().all(|p| p.image.is_empty() && p.alternatives.is_empty()));
    }

    #[test]
    fn test_green_query_boosts_every_variant() {
        // "organic" scores 65 and every variant name contains it
        let products = generate_products("organic");
        assert!(products.iter().all(|p| p.score == 85));
        assert!(products.iter().all(|p| p.category == "food"));
    }

    #[test]
    fn test_breakdown_follows_score() {
        let products = generate_products("plastic straw");
        // base 30: Original 30, Premium 40, Eco-Friendly 50
        assert_eq!(products[0].score, 30);
        assert_eq!(products[0].breakdown, ScoreBreakdown::new(20, 0, 0));
        assert_eq!(products[2].score, 50);
        assert_eq!(products[2].breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_score_clamped() {
        let products = generate_products("organic vegan green local");
        assert!(products.iter().all(|p| p.score == 100));
    }

    #[test]
    fn test_query_case_preserved_in_name() {
        let products = generate_products("Oat Milk");
        assert_eq!(products[0].name, "Oat Milk Original");
    }
}
