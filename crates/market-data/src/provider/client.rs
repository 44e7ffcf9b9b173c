//! Shared request plumbing for every remote API client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::errors::MarketDataError;
use crate::models::QueryParams;

use super::config::ClientConfig;
use super::traits::HttpTransport;

/// Raw bodies longer than this are cut when used as an error message.
const MAX_ERROR_TEXT: usize = 200;

/// Error envelope returned by the remote APIs
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Builds URLs against one [`ClientConfig`] and decodes JSON responses.
#[derive(Clone)]
pub struct ApiClient {
    provider: &'static str,
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(
        provider: &'static str,
        config: Arc<ClientConfig>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            provider,
            config,
            transport,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Resolve `path` against the base origin and attach `params`.
    ///
    /// No `?` is appended when there are no parameters.
    pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<Url, MarketDataError> {
        let mut url = self.config.base_url().join(path)?;
        if !params.is_empty() {
            url.set_query(Some(&params.to_query_string()));
        }
        Ok(url)
    }

    /// GET `path` and decode a 2xx body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<T, MarketDataError> {
        let url = self.build_url(path, params)?;

        debug!(
            "{} request: {} with {} params",
            self.provider,
            path,
            params.len()
        );

        let response = self.transport.get(&url, self.config.headers()).await?;

        if !response.is_success() {
            let message = extract_error_message(response.status, &response.body);
            warn!(
                "{} returned status {} for {}: {}",
                self.provider, response.status, path, message
            );
            return Err(MarketDataError::Upstream {
                status: response.status,
                message,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| MarketDataError::Decode {
            provider: self.provider.to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize a typed query and GET `path` with it.
    pub async fn get_with<Q, T>(&self, path: &str, query: &Q) -> Result<T, MarketDataError>
    where
        Q: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let params = QueryParams::from_serializable(query)?;
        self.get_json(path, &params).await
    }
}

/// Message for a non-2xx response.
///
/// The JSON `error` field wins, then the raw body text (cut to 200
/// characters), then `Request failed (<status>)`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => envelope.error.unwrap_or_default(),
        Err(_) => body.chars().take(MAX_ERROR_TEXT).collect(),
    };
    let message = message.trim();
    if message.is_empty() {
        format!("Request failed ({})", status)
    } else {
        message.to_string()
    }
}
