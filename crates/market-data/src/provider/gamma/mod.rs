//! Gamma API client.
//!
//! Gamma serves market and event metadata:
//! - Market listing via /markets
//! - Full-text search via /public-search
//!
//! API documentation: https://docs.polymarket.com

use std::sync::Arc;

use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{Market, MarketsQuery, QueryParams, SearchQuery, SearchResponse};
use crate::provider::{ApiClient, ClientConfig, HttpTransport};

pub const GAMMA_BASE_URL: &str = "https://gamma-api.polymarket.com";
const PROVIDER_ID: &str = "GAMMA";

const MARKETS_PATH: &str = "/markets";
const SEARCH_PATH: &str = "/public-search";

/// Client for the Gamma metadata API.
#[derive(Clone)]
pub struct GammaClient {
    api: ApiClient,
}

impl GammaClient {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api: ApiClient::new(PROVIDER_ID, config, transport),
        }
    }

    /// List markets matching `query`.
    pub async fn list_markets(&self, query: &MarketsQuery) -> Result<Vec<Market>, MarketDataError> {
        self.api.get_with(MARKETS_PATH, query).await
    }

    /// List markets with parameters forwarded verbatim. The body is returned undecoded.
    pub async fn list_markets_raw(&self, params: &QueryParams) -> Result<Value, MarketDataError> {
        self.api.get_json(MARKETS_PATH, params).await
    }

    /// Search events, tags and profiles.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, MarketDataError> {
        self.api.get_with(SEARCH_PATH, query).await
    }

    pub async fn search_raw(&self, params: &QueryParams) -> Result<Value, MarketDataError> {
        self.api.get_json(SEARCH_PATH, params).await
    }

    /// Markets whose slug matches. Gamma answers with a list even for one slug.
    pub async fn market_by_slug(&self, slug: &str) -> Result<Vec<Market>, MarketDataError> {
        let query = MarketsQuery {
            slug: Some(vec![slug.to_string()]),
            ..Default::default()
        };
        self.list_markets(&query).await
    }

    pub async fn market_by_id(&self, id: u64) -> Result<Vec<Market>, MarketDataError> {
        let query = MarketsQuery {
            id: Some(vec![id]),
            ..Default::default()
        };
        self.list_markets(&query).await
    }
}

// ============================================================================
// Tests
// ============================================================================
