//! Per-provider client configuration.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use url::Url;

use crate::errors::MarketDataError;

/// Base origin and default headers for one remote API.
///
/// Built once at startup and shared by every client of that API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    headers: HeaderMap,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self { base_url, headers }
    }

    pub fn parse(base_url: &str) -> Result<Self, MarketDataError> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// Add or override a default header (including `Accept`).
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_defaults_to_json() {
        let config = ClientConfig::parse("https://gamma-api.polymarket.com").unwrap();
        assert_eq!(config.headers().get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_accept_can_be_overridden() {
        let config = ClientConfig::parse("https://example.com")
            .unwrap()
            .with_header(ACCEPT, HeaderValue::from_static("text/plain"));
        assert_eq!(config.headers().get(ACCEPT).unwrap(), "text/plain");
        assert_eq!(config.headers().len(), 1);
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ClientConfig::parse("not a url"),
            Err(MarketDataError::InvalidUrl(_))
        ));
    }
}
