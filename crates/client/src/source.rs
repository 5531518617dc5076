//! Remote product sources.

use async_trait::async_trait;

use storefront_catalog::Product;

/// Default catalog endpoint.
pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// A provider of the full product collection.
///
/// The catalog is fetched whole: sources do not paginate, stream, or
/// return partial results.
#[async_trait]
pub trait ProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError>;
}

/// HTTP source issuing a single unauthenticated GET for the entire
/// catalog, expected back as a JSON array of product records.
///
/// No retry and no backoff; a failed fetch surfaces as a [`SourceError`]
/// and the caller decides how to degrade.
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpProductSource {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCTS_URL)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Api(status, body));
        }

        resp.json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}
