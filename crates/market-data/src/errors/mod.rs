//! Error types for the market data crate.
//!
//! [`MarketDataError`] is the single error enum returned by every client in
//! this crate. Its `Display` output is what ends up in the proxy's error
//! envelope, so upstream failures render as the bare extracted message.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Network error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The provider answered with a non-2xx status.
    ///
    /// `message` is the best-effort extraction from the response body: the
    /// JSON `error` field, else the raw text, else `Request failed (<status>)`.
    #[error("{message}")]
    Upstream {
        /// HTTP status returned by the provider
        status: u16,
        /// Extracted error message
        message: String,
    },

    /// A 2xx response body did not match the declared shape.
    #[error("Failed to decode {provider} response: {message}")]
    Decode {
        /// The provider whose payload failed to decode
        provider: String,
        /// The serde error message
        message: String,
    },

    /// The base URL or request path could not be combined into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The parameter object could not be flattened into query parameters.
    #[error("Invalid query parameters: {0}")]
    InvalidParams(String),
}

impl MarketDataError {
    /// HTTP status reported by the provider, if the failure was an upstream response.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        MarketDataError::Transport {
            message: err.to_string(),
        }
    }
}
