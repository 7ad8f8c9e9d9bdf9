use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use super::traits::StockFeed;
use crate::errors::CoreError;
use crate::models::stock::StockQuote;

const BASE_URL: &str = "https://staging-api.brainbase.com";

/// Brainbase staging feed for opening stock quotes.
///
/// - **Shape**: a single JSON array of `{symbol, name, price}` objects.
/// - **Endpoint**: `GET /stocks.php`
/// - **Auth**: none required.
pub struct BrainbaseFeed {
    client: Client,
    base_url: String,
}

impl BrainbaseFeed {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Feed pointed at a non-default host (mirrors, local fixtures).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }
}

impl Default for BrainbaseFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StockFeed for BrainbaseFeed {
    fn name(&self) -> &str {
        "Brainbase"
    }

    async fn fetch_quotes(&self) -> Result<Vec<StockQuote>, CoreError> {
        let url = format!("{}/stocks.php", self.base_url);

        let quotes: Vec<StockQuote> = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                feed: "Brainbase".into(),
                message: format!("Failed to parse quote list: {e}"),
            })?;

        debug!("fetched {} quotes from {}", quotes.len(), self.name());
        Ok(quotes)
    }
}
