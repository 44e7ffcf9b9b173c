//! HTTP transport trait.
//!
//! Every client in this crate issues its requests through an [`HttpTransport`]
//! trait object, so the network can be swapped for a scripted stub in tests.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use url::Url;

use crate::errors::MarketDataError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests.
///
/// Implementations return `Ok` for any response that arrived, whatever its
/// status. `Err` is reserved for transport failures (DNS, TLS, resets).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketlens_market_data::provider::{HttpTransport, RawResponse};
///
/// struct Canned;
///
/// #[async_trait]
/// impl HttpTransport for Canned {
///     async fn get(&self, _url: &Url, _headers: &HeaderMap) -> Result<RawResponse, MarketDataError> {
///         Ok(RawResponse::new(200, "[]"))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse, MarketDataError>;
}
