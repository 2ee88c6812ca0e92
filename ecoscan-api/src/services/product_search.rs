//! Product search, filtering and relevance ordering

use ecoscan_common::{Product, SustainabilityTier};
use serde::Deserialize;

use super::catalogue::{demo_products, products_in_category};
use super::product_source::{resolve_candidates, ProductSource};

/// Search criteria; every field defaults to empty (no constraint)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    #[serde(default)]
    pub q: String,
    /// Exact category
    #[serde(default)]
    pub category: String,
    /// Brand, compared case-insensitively
    #[serde(default)]
    pub brand: String,
    /// Tier name (excellent, good, fair, poor)
    #[serde(default)]
    pub sustainability: String,
}

impl SearchParams {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}

/// Run a search
///
/// Candidate pool: the category listing when only a category is given,
/// otherwise external/generated products for the query. The demonstration
/// catalogue is always appended before filtering.
pub async fn search_products(source: &dyn ProductSource, params: &SearchParams) -> Vec<Product> {
    let mut pool = if !params.category.is_empty() && params.q.is_empty() {
        products_in_category(&params.category).to_vec()
    } else if !params.q.is_empty() {
        resolve_candidates(source, &params.q).await
    } else {
        Vec::new()
    };

    pool.extend(demo_products().iter().cloned());

    filter_and_rank(pool, params)
}

/// Keep products matching every given criterion, then order by relevance
///
/// With a query: name matches first, then score descending. Without: score
/// descending. The sort is stable so ties keep pool order.
pub fn filter_and_rank(pool: Vec<Product>, params: &SearchParams) -> Vec<Product> {
    let query_lower = params.q.to_lowercase();
    let brand_lower = params.brand.to_lowercase();
    let tier = SustainabilityTier::parse(&params.sustainability);

    let mut results: Vec<Product> = pool
        .into_iter()
        .filter(|p| {
            query_lower.is_empty()
                || p.name.to_lowercase().contains(&query_lower)
                || p.brand.to_lowercase().contains(&query_lower)
                || p.category.to_lowercase().contains(&query_lower)
        })
        .filter(|p| params.category.is_empty() || p.category == params.category)
        .filter(|p| brand_lower.is_empty() || p.brand.to_lowercase() == brand_lower)
        .filter(|p| tier.map_or(true, |t| t.contains(p.score)))
        .collect();

    if query_lower.is_empty() {
        results.sort_by(|a, b| b.score.cmp(&a.score));
    } else {
        results.sort_by_key(|p| {
            let name_miss = !p.name.to_lowercase().contains(&query_lower);
            (name_miss, std::cmp::Reverse(p.score))
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::product_source::OfflineSource;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn params(q: &str, category: &str, brand: &str, sustainability: &str) -> SearchParams {
        SearchParams {
            q: q.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            sustainability: sustainability.to_string(),
        }
    }

    #[tokio::test]
    async fn test_category_browse() {
        let results = search_products(&OfflineSource, &params("", "electronics", "", "")).await;

        // 8 listed electronics + 3 electronics demonstration entries
        assert_eq!(results.len(), 11);
        assert!(results.iter().all(|p| p.category == "electronics"));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        // Stable: listing entry precedes the demo entry with the same score
        assert_eq!(&ids(&results)[..2], ["elec_1", "1"]);
        assert_eq!(ids(&results).last(), Some(&"elec_6"));
    }

    #[tokio::test]
    async fn test_category_browse_with_brand_and_tier() {
        let results = search_products(&OfflineSource, &params("", "electronics", "apple", "good")).await;
        assert_eq!(ids(&results), ["elec_4", "elec_7", "elec_3", "6"]);
    }

    #[tokio::test]
    async fn test_unknown_category_yields_nothing() {
        let results = search_products(&OfflineSource, &params("", "toys", "", "")).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_no_criteria_returns_demo_catalogue_by_score() {
        let results = search_products(&OfflineSource, &SearchParams::default()).await;
        assert_eq!(ids(&results), ["7", "1", "8", "2", "5", "6", "3", "4"]);
    }

    #[tokio::test]
    async fn test_query_generates_and_ranks() {
        let results = search_products(&OfflineSource, &SearchParams::query("bottle")).await;
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["bottle Eco-Friendly", "bottle Premium", "bottle Original"]);
    }

    #[tokio::test]
    async fn test_organic_query() {
        let results = search_products(&OfflineSource, &SearchParams::query("organic")).await;
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|p| p.id.starts_with("dynamic_") && p.score == 85));
        // Equal scores keep generation order
        assert_eq!(ids(&results), ["dynamic_0", "dynamic_1", "dynamic_2"]);
    }

    #[tokio::test]
    async fn test_name_matches_rank_before_brand_matches() {
        let results = search_products(&OfflineSource, &SearchParams::query("apple")).await;
        assert_eq!(
            ids(&results),
            ["dynamic_2", "dynamic_1", "dynamic_0", "1", "6"]
        );
        // iPhone (85) outscores every generated product but only matches by brand
        assert_eq!(results[3].score, 85);
        assert!(results[0].score < results[3].score);
    }

    #[tokio::test]
    async fn test_query_matches_category_text() {
        let results = search_products(&OfflineSource, &params("food", "", "", "")).await;
        // generated "food ..." variants plus Coca Cola and Beyond Meat via category
        assert!(results.iter().any(|p| p.id == "4"));
        assert!(results.iter().any(|p| p.id == "8"));
        let first_demo = results.iter().position(|p| !p.id.starts_with("dynamic_")).unwrap();
        assert_eq!(first_demo, 3);
    }

    #[test]
    fn test_tier_filter_boundary() {
        let pool = vec![Product::synthetic("x", "Kettle", "Brand", "home", 79)];

        let excellent = filter_and_rank(pool.clone(), &params("", "", "", "excellent"));
        assert!(excellent.is_empty());

        let good = filter_and_rank(pool, &params("", "", "", "good"));
        assert_eq!(ids(&good), ["x"]);
    }

    #[test]
    fn test_unknown_tier_is_ignored() {
        let pool = vec![Product::synthetic("x", "Kettle", "Brand", "home", 10)];
        let results = filter_and_rank(pool, &params("", "", "", "stellar"));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_category_is_exact_and_brand_is_case_insensitive() {
        let pool = vec![
            Product::synthetic("a", "Kettle", "Acme", "home", 50),
            Product::synthetic("b", "Kettle", "ACME", "Home", 60),
        ];
        let results = filter_and_rank(pool, &params("", "home", "aCmE", ""));
        assert_eq!(ids(&results), ["a"]);
    }

    #[test]
    fn test_query_case_insensitive() {
        let pool = vec![Product::synthetic("a", "Bamboo Brush", "Acme", "home", 50)];
        let results = filter_and_rank(pool, &params("BAMBOO", "", "", ""));
        assert_eq!(results.len(), 1);
    }
}
