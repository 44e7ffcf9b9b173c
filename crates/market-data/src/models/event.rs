//! Gamma event model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::market::{de_opt_string_or_number, Category, Market, NumberOrString, Tag};

/// A grouping of related markets (e.g. "US Election 2028").
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub volume: Option<NumberOrString>,
    pub liquidity: Option<NumberOrString>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
    pub markets: Option<Vec<Market>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Nested markets, or an empty slice when the event carries none.
    pub fn markets(&self) -> &[Market] {
        self.markets.as_deref().unwrap_or_default()
    }
}
