//! [`MarketsSource`] implementations.

use std::sync::Arc;

use async_trait::async_trait;
use marketlens_market_data::provider::ApiClient;
use marketlens_market_data::{
    ClientConfig, GammaClient, HttpTransport, Market, MarketsQuery, SearchQuery, SearchResponse,
};

use super::traits::MarketsSource;
use crate::errors::Result;

pub const PROXY_MARKETS_PATH: &str = "/proxy/markets";
pub const PROXY_SEARCH_PATH: &str = "/proxy/search";

/// Fetches straight from Gamma.
#[derive(Clone)]
pub struct GammaSource {
    client: GammaClient,
}

impl GammaSource {
    pub fn new(client: GammaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketsSource for GammaSource {
    async fn list_markets(&self, query: &MarketsQuery) -> Result<Vec<Market>> {
        Ok(self.client.list_markets(query).await?)
    }

    async fn search_markets(&self, query: &SearchQuery) -> Result<SearchResponse> {
        Ok(self.client.search(query).await?)
    }
}

/// Fetches through the MarketLens proxy endpoints.
///
/// `config` points at the MarketLens server origin. Proxy failures arrive as
/// `{"error": "..."}` with a non-2xx status and surface as
/// [`QueryError::Response`](crate::errors::QueryError::Response) carrying that message.
#[derive(Clone)]
pub struct ProxySource {
    api: ApiClient,
}

impl ProxySource {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api: ApiClient::new("PROXY", config, transport),
        }
    }
}

#[async_trait]
impl MarketsSource for ProxySource {
    async fn list_markets(&self, query: &MarketsQuery) -> Result<Vec<Market>> {
        Ok(self.api.get_with(PROXY_MARKETS_PATH, query).await?)
    }

    async fn search_markets(&self, query: &SearchQuery) -> Result<SearchResponse> {
        Ok(self.api.get_with(PROXY_SEARCH_PATH, query).await?)
    }
}
