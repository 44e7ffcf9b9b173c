//! CLOB API client.
//!
//! The central limit order book serves live pricing per outcome token:
//! - Best price via /price
//! - Midpoint via /midpoint
//! - Order book via /book
//! - Price history via /prices-history

use std::sync::Arc;

use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{
    MidpointResponse, OrderBook, PriceHistory, PriceHistoryQuery, PriceResponse, QueryParams, Side,
};
use crate::provider::{ApiClient, ClientConfig, HttpTransport};

pub const CLOB_BASE_URL: &str = "https://clob.polymarket.com";
const PROVIDER_ID: &str = "CLOB";

const BOOK_PATH: &str = "/book";
const HISTORY_PATH: &str = "/prices-history";

#[derive(Clone)]
pub struct ClobClient {
    api: ApiClient,
}

impl ClobClient {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api: ApiClient::new(PROVIDER_ID, config, transport),
        }
    }

    fn token_params(token_id: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("token_id", token_id);
        params
    }

    /// Best price on `side` for an outcome token.
    pub async fn price(&self, token_id: &str, side: Side) -> Result<PriceResponse, MarketDataError> {
        let mut params = Self::token_params(token_id);
        params.insert("side", side.as_str());
        self.api.get_json("/price", &params).await
    }

    pub async fn midpoint(&self, token_id: &str) -> Result<MidpointResponse, MarketDataError> {
        self.api
            .get_json("/midpoint", &Self::token_params(token_id))
            .await
    }

    pub async fn order_book(&self, token_id: &str) -> Result<OrderBook, MarketDataError> {
        self.api
            .get_json(BOOK_PATH, &Self::token_params(token_id))
            .await
    }

    pub async fn order_book_raw(&self, params: &QueryParams) -> Result<Value, MarketDataError> {
        self.api.get_json(BOOK_PATH, params).await
    }

    pub async fn price_history(
        &self,
        query: &PriceHistoryQuery,
    ) -> Result<PriceHistory, MarketDataError> {
        self.api.get_with(HISTORY_PATH, query).await
    }

    pub async fn price_history_raw(&self, params: &QueryParams) -> Result<Value, MarketDataError> {
        self.api.get_json(HISTORY_PATH, params).await
    }
}
