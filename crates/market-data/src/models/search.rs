//! Gamma public-search response models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::event::Event;
use super::market::de_opt_string_or_number;

/// Tag hit returned by public search.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub id: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub event_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trader profile hit returned by public search.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub proxy_wallet: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub has_more: Option<bool>,
    pub total_results: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Events, tags and profiles matching a search query. Any section may be absent.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<TagSummary>>,
    pub profiles: Option<Vec<Profile>>,
    pub pagination: Option<Pagination>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResponse {
    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or_default()
    }
}
