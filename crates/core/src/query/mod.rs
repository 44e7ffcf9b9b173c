//! Reactive fetch primitives.
//!
//! - [`MarketsQueryHook`] and [`MarketSearchHook`] hold a [`QueryState`] and
//!   refetch when their inputs change
//! - [`MarketsSource`] is where they fetch from ([`ProxySource`] or [`GammaSource`])

mod hooks;
mod model;
mod runner;
mod sources;
mod traits;

pub use hooks::{params_key, MarketSearchHook, MarketsQueryHook};
pub use model::QueryState;
pub use sources::{GammaSource, ProxySource, PROXY_MARKETS_PATH, PROXY_SEARCH_PATH};
pub use traits::MarketsSource;
