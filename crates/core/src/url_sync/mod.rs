//! Two-way binding between [`FilterState`] and the location query string.
//!
//! Keys, in emission order: `q`, `status`, `sort`, `dir`, `category`,
//! `minVolume`, `from`, `to`. Default-valued fields are omitted. When
//! parsing, each key falls back to its default independently.

mod history;

pub use history::{History, MemoryHistory};

use log::debug;
use url::form_urlencoded;

use crate::filters::{
    CategoryFilter, FilterState, MarketStatus, SortDirection, SortOption, VolumeThreshold,
};
use crate::utils::time_utils::parse_date_input;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a query string (with or without `?`). The first occurrence of a key wins.
pub fn parse_filters(query: &str) -> FilterState {
    let mut filters = FilterState::default();
    let mut seen: Vec<String> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        if seen.iter().any(|existing| *existing == key) {
            continue;
        }
        seen.push(key.to_string());

        match key.as_ref() {
            "q" => filters.query = value.trim().to_string(),
            "status" => filters.status = MarketStatus::from_param(&value).unwrap_or_default(),
            "sort" => filters.sort_by = SortOption::from_param(&value).unwrap_or_default(),
            "dir" => {
                filters.sort_direction = SortDirection::from_param(&value).unwrap_or_default()
            }
            "category" => filters.category = CategoryFilter::from_param(&value),
            "minVolume" => {
                filters.volume_threshold = VolumeThreshold::from_param(&value).unwrap_or_default()
            }
            "from" => filters.date_from = parse_date_input(&value),
            "to" => filters.date_to = parse_date_input(&value),
            _ => {}
        }
    }

    filters
}

/// Serialize the non-default fields of `filters`, using `search` for `q`.
pub fn to_query_string(filters: &FilterState, search: &str) -> String {
    let defaults = FilterState::default();
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !search.is_empty() {
        serializer.append_pair("q", search);
    }
    if filters.status != defaults.status {
        serializer.append_pair("status", filters.status.as_param());
    }
    if filters.sort_by != defaults.sort_by {
        serializer.append_pair("sort", filters.sort_by.as_param());
    }
    if filters.sort_direction != defaults.sort_direction {
        serializer.append_pair("dir", filters.sort_direction.as_param());
    }
    if filters.category != defaults.category {
        serializer.append_pair("category", filters.category.as_param());
    }
    if filters.volume_threshold != defaults.volume_threshold {
        serializer.append_pair("minVolume", &filters.volume_threshold.as_param());
    }
    if let Some(from) = filters.date_from {
        serializer.append_pair("from", &from.format(DATE_FORMAT).to_string());
    }
    if let Some(to) = filters.date_to {
        serializer.append_pair("to", &to.format(DATE_FORMAT).to_string());
    }

    serializer.finish()
}

/// Keeps a [`History`] in step with the filter state.
pub struct UrlSync<H: History> {
    history: H,
    initialized: bool,
}

impl<H: History> UrlSync<H> {
    pub fn new(history: H) -> Self {
        Self {
            history,
            initialized: false,
        }
    }

    /// Parse the initial filters. Only the first call returns them.
    pub fn initialize(&mut self) -> Option<FilterState> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        Some(parse_filters(&self.history.query()))
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replace the history entry when the serialized filters differ from it.
    /// Returns whether a replacement happened.
    pub fn sync(&mut self, filters: &FilterState, search: &str) -> bool {
        if !self.initialized {
            return false;
        }
        let next = to_query_string(filters, search);
        if next == self.history.query() {
            return false;
        }
        debug!("Replacing query string with '{}'", next);
        self.history.replace_query(&next);
        true
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn query(&self) -> String {
        self.history.query()
    }
}
