//! CLOB (central limit order book) response models.
//!
//! Prices and sizes arrive as decimal strings; the accessors parse them on demand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::market::NumberOrString;

/// Best price for one side of a token's book.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub price: Option<NumberOrString>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PriceResponse {
    pub fn value(&self) -> Option<f64> {
        self.price.as_ref().and_then(NumberOrString::as_f64)
    }
}

/// Midpoint between the best bid and best ask.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidpointResponse {
    pub mid: Option<NumberOrString>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MidpointResponse {
    pub fn value(&self) -> Option<f64> {
        self.mid.as_ref().and_then(NumberOrString::as_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: NumberOrString,
    pub size: NumberOrString,
}

/// Order book snapshot for a single token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub market: Option<String>,
    pub asset_id: Option<String>,
    pub hash: Option<String>,
    pub timestamp: Option<NumberOrString>,
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    #[serde(default)]
    pub asks: Vec<BookLevel>,
    pub tick_size: Option<NumberOrString>,
    pub min_order_size: Option<NumberOrString>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderBook {
    /// Highest bid price.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids
            .iter()
            .filter_map(|level| level.price.as_f64())
            .max_by(f64::total_cmp)
    }

    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks
            .iter()
            .filter_map(|level| level.price.as_f64())
            .min_by(f64::total_cmp)
    }
}

/// A single `(timestamp, price)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix seconds
    pub t: i64,
    pub p: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    #[serde(default)]
    pub history: Vec<PricePoint>,
}
