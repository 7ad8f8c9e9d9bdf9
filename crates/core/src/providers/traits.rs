use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::stock::StockQuote;

/// Trait abstraction for opening-quote feeds (SOLID: Dependency Inversion).
///
/// The production feed is an HTTP endpoint; tests inject in-memory
/// implementations. If the feed moves or changes shape, we replace only
/// that one implementation and the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StockFeed: Send + Sync {
    /// Human-readable name of this feed (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the opening quotes that start a session.
    /// Order matters: snapshots keep this order on every simulated day.
    async fn fetch_quotes(&self) -> Result<Vec<StockQuote>, CoreError>;
}
