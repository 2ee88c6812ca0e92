//! External product sources and the fallback to generated products

use async_trait::async_trait;
use ecoscan_common::Product;
use tracing::{debug, warn};

use super::generator::generate_products;

/// Outcome of a single external lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The source returned usable products
    Found(Vec<Product>),
    /// The source answered but had nothing usable
    Empty,
    /// Transport, status or decoding failure
    Failed(String),
}

impl LookupOutcome {
    /// Wrap a product list, mapping an empty list to `Empty`
    pub fn from_products(products: Vec<Product>) -> Self {
        if products.is_empty() {
            LookupOutcome::Empty
        } else {
            LookupOutcome::Found(products)
        }
    }
}

/// Source of real product records for a free-text query
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Look up products for `query`. Must not panic and must be time-bounded.
    async fn lookup(&self, query: &str) -> LookupOutcome;
}

/// Source that never has results
///
/// Used when external lookups are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl ProductSource for OfflineSource {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn lookup(&self, _query: &str) -> LookupOutcome {
        LookupOutcome::Empty
    }
}

/// Candidate products for a query
///
/// One attempt against `source`; anything other than a non-empty result falls
/// back to generated variants. Failures are logged, never returned.
pub async fn resolve_candidates(source: &dyn ProductSource, query: &str) -> Vec<Product> {
    match source.lookup(query).await {
        LookupOutcome::Found(products) if !products.is_empty() => {
            debug!(
                source = source.name(),
                query = %query,
                count = products.len(),
                "Using external products"
            );
            products
        }
        LookupOutcome::Found(_) | LookupOutcome::Empty => {
            debug!(source = source.name(), query = %query, "No external products, generating");
            generate_products(query)
        }
        LookupOutcome::Failed(reason) => {
            warn!(
                source = source.name(),
                query = %query,
                error = %reason,
                "External lookup failed, generating"
            );
            generate_products(query)
        }
    }
}
