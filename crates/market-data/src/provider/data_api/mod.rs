//! Data API client. Only the health probe is used.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::MarketDataError;
use crate::models::QueryParams;
use crate::provider::{ApiClient, ClientConfig, HttpTransport};

pub const DATA_API_BASE_URL: &str = "https://data-api.polymarket.com";
const PROVIDER_ID: &str = "DATA_API";

/// Response from the `/` health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub data: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone)]
pub struct DataApiClient {
    api: ApiClient,
}

impl DataApiClient {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api: ApiClient::new(PROVIDER_ID, config, transport),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, MarketDataError> {
        self.api.get_json("/", &QueryParams::new()).await
    }
}
