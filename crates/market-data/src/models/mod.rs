//! Market data models
//!
//! - `market` - Gamma market record and resolved-value accessors
//! - `event` - Gamma event grouping
//! - `search` - public-search response sections
//! - `clob` - price, midpoint, order book and price history
//! - `query` - typed request parameters
//! - `params` - flattened query parameters

mod clob;
mod event;
mod market;
mod params;
mod query;
mod search;

pub use clob::{BookLevel, MidpointResponse, OrderBook, PriceHistory, PricePoint, PriceResponse};
pub use event::Event;
pub use market::{
    parse_timestamp_ms, Category, Market, MarketStatusBadge, NumberOrString, StringList, Tag,
};
pub use params::{QueryParams, QueryValue};
pub use query::{HistoryInterval, MarketsQuery, PriceHistoryQuery, SearchQuery, Side};
pub use search::{Pagination, Profile, SearchResponse, TagSummary};
