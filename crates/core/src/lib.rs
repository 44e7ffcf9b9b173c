//! MarketLens Core - filter state, query hooks and the dashboard session.
//!
//! This crate holds the state logic of the dashboard and knows nothing about
//! HTTP serving. Hooks fetch through a [`query::MarketsSource`], which is
//! either the proxy endpoints or the Gamma client directly.

pub mod controller;
pub mod errors;
pub mod filters;
pub mod query;
pub mod url_sync;
pub mod utils;

pub use controller::{Dashboard, DashboardView, MarketRow, ResultArea};
pub use errors::{QueryError, Result};
pub use filters::FilterState;
pub use query::{MarketSearchHook, MarketsQueryHook, MarketsSource, QueryState};
pub use url_sync::{History, MemoryHistory, UrlSync};
