//! Scoring, catalogue and search services

pub mod catalogue;
pub mod generator;
pub mod keywords;
pub mod openfoodfacts_client;
pub mod product_search;
pub mod product_source;
pub mod score;
pub mod suggestions;

pub use generator::generate_products;
pub use keywords::{determine_category, score_from_keywords};
pub use openfoodfacts_client::OpenFoodFactsClient;
pub use product_search::{search_products, SearchParams};
pub use product_source::{resolve_candidates, LookupOutcome, OfflineSource, ProductSource};
pub use score::compute_score;
pub use suggestions::get_suggestions;
