//! MarketLens Market Data Crate
//!
//! Typed clients for the public Polymarket APIs used by the MarketLens
//! dashboard.
//!
//! # Overview
//!
//! - Gamma: market listing, market lookup by slug or id, public search
//! - CLOB: best price, midpoint, order book, price history
//! - Data API: health probe
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Typed query     | --> |   QueryParams    |  (flattened, repeated keys)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    ApiClient     |  (ClientConfig + URL building)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  HttpTransport   |  (reqwest, or a stub in tests)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  Typed response  |  (Market, SearchResponse, ...)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Market`] - A prediction market with resolved-value accessors
//! - [`SearchResponse`] - Events, tags and profiles matching a search
//! - [`MarketsQuery`] / [`SearchQuery`] - Typed request parameters
//! - [`QueryParams`] - Flattened parameters shared with the proxy
//! - [`MarketDataError`] - Error type for every client call

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{
    Event, Market, MarketStatusBadge, MarketsQuery, QueryParams, QueryValue, SearchQuery,
    SearchResponse,
};
pub use provider::clob::{ClobClient, CLOB_BASE_URL};
pub use provider::data_api::{DataApiClient, HealthResponse, DATA_API_BASE_URL};
pub use provider::gamma::{GammaClient, GAMMA_BASE_URL};
pub use provider::{ClientConfig, HttpTransport, ReqwestTransport};
#[cfg(any(test, feature = "test-util"))]
pub use provider::StubTransport;
