use async_trait::async_trait;
use marketlens_market_data::{Market, MarketsQuery, SearchQuery, SearchResponse};

use crate::errors::Result;

/// Where query hooks fetch from.
///
/// The browser-facing implementation goes through the proxy endpoints; the
/// server wires hooks straight to the Gamma client.
#[async_trait]
pub trait MarketsSource: Send + Sync {
    async fn list_markets(&self, query: &MarketsQuery) -> Result<Vec<Market>>;

    async fn search_markets(&self, query: &SearchQuery) -> Result<SearchResponse>;
}
