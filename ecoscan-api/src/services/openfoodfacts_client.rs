//! Open Food Facts API client
//!
//! Best-effort lookup of real food products. A single bounded request per
//! query; every failure is reported as `LookupOutcome::Failed`.

use std::time::Duration;

use async_trait::async_trait;
use ecoscan_common::config::ExternalLookupConfig;
use ecoscan_common::Product;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use super::product_source::{LookupOutcome, ProductSource};

const SEARCH_PATH: &str = "/cgi/search.pl";
const USER_AGENT: &str = concat!("EcoScan/", env!("CARGO_PKG_VERSION"));
const BASE_SCORE: u32 = 50;
const ORGANIC_BONUS: u32 = 20;
const PACKAGING_BONUS: u32 = 15;
const FAIR_TRADE_BONUS: u32 = 10;
const LOCAL_BONUS: u32 = 5;
const MIN_NAME_CHARS: usize = 3;

/// Open Food Facts client errors
#[derive(Debug, Error)]
pub enum OffError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Search response envelope
///
/// Records stay raw JSON; only the ones the client keeps are decoded.
#[derive(Debug, Default, Deserialize)]
pub struct OffSearchResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    pub products: Vec<Value>,
}

/// Subset of an Open Food Facts product record
///
/// Fields of an unexpected JSON type decode as absent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OffProduct {
    #[serde(deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub product_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub brands: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient_tags")]
    pub labels_tags: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub packaging: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub origins: Option<String>,
}

/// Strings pass through, numbers and booleans are rendered, anything else is absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// String elements of an array; any other shape yields no tags
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

impl OffProduct {
    /// Decode one raw record; non-object records are skipped
    pub fn from_record(record: Value) -> Option<Self> {
        match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed Open Food Facts record");
                None
            }
        }
    }

    fn code_string(&self) -> String {
        self.code.clone().unwrap_or_default()
    }

    /// Accepted products have a name longer than two characters
    fn usable_name(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .filter(|name| name.chars().count() >= MIN_NAME_CHARS)
    }

    fn into_product(self) -> Option<Product> {
        let name = self.usable_name()?.to_string();
        let score = sustainability_score(&self);
        let brand = self
            .brands
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or("Unknown Brand")
            .to_string();
        let image = self.image_url.clone().unwrap_or_default();

        Some(
            Product::synthetic(format!("off_{}", self.code_string()), name, brand, "food", score)
                .with_image(image),
        )
    }
}

/// Sustainability score for a food product record
///
/// Base 50; +20 organic label, +15 recyclable/biodegradable/compostable
/// packaging, +10 fair-trade label, +5 local/regional/domestic origin.
pub fn sustainability_score(product: &OffProduct) -> u32 {
    let labels = product.labels_tags.join(" ").to_lowercase();
    let packaging = product.packaging.as_deref().unwrap_or_default().to_lowercase();
    let origins = product.origins.as_deref().unwrap_or_default().to_lowercase();

    let mut score = BASE_SCORE;
    if labels.contains("organic") {
        score += ORGANIC_BONUS;
    }
    if ["recyclable", "biodegradable", "compostable"]
        .iter()
        .any(|k| packaging.contains(k))
    {
        score += PACKAGING_BONUS;
    }
    if labels.contains("fair trade") || labels.contains("fair-trade") {
        score += FAIR_TRADE_BONUS;
    }
    if ["local", "regional", "domestic"].iter().any(|k| origins.contains(k)) {
        score += LOCAL_BONUS;
    }
    score.min(100)
}

/// Open Food Facts search client
pub struct OpenFoodFactsClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    max_results: usize,
}

impl OpenFoodFactsClient {
    pub fn new(config: &ExternalLookupConfig) -> Result<Self, OffError> {
        let timeout = config.timeout();
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| OffError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
            max_results: config.max_results,
        })
    }

    /// Search for products matching `query`
    ///
    /// Only the first `max_results` records are considered; those without a
    /// usable name are dropped.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, OffError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        tracing::debug!(query = %query, url = %url, "Querying Open Food Facts");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
            ])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OffError::Status(status.as_u16()));
        }

        let body: OffSearchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                OffError::Timeout(self.timeout)
            } else {
                OffError::Parse(e.to_string())
            }
        })?;

        let products: Vec<Product> = body
            .products
            .into_iter()
            .take(self.max_results)
            .filter_map(OffProduct::from_record)
            .filter_map(OffProduct::into_product)
            .collect();

        tracing::debug!(query = %query, count = products.len(), "Open Food Facts results");

        Ok(products)
    }

    fn classify(&self, error: reqwest::Error) -> OffError {
        if error.is_timeout() {
            OffError::Timeout(self.timeout)
        } else {
            OffError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl ProductSource for OpenFoodFactsClient {
    fn name(&self) -> &'static str {
        "openfoodfacts"
    }

    async fn lookup(&self, query: &str) -> LookupOutcome {
        match self.search(query).await {
            Ok(products) => LookupOutcome::from_products(products),
            Err(e) => LookupOutcome::Failed(e.to_string()),
        }
    }
}
