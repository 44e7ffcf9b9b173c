//! Local filter predicates and the sort comparator.
//!
//! Predicates run client-side over whatever the remote queries returned, so a
//! market that slipped past a remote filter is still excluded here.

use std::cmp::Ordering;

use marketlens_market_data::Market;

use super::model::{CategoryFilter, FilterState, MarketStatus, SortDirection, SortOption};
use crate::utils::time_utils::{local_day_end_ms, local_day_start_ms};

/// `Active` requires `active && !closed`; `Resolved` requires `closed`.
pub fn matches_status(market: &Market, status: MarketStatus) -> bool {
    match status {
        MarketStatus::All => true,
        MarketStatus::Resolved => market.is_closed(),
        MarketStatus::Active => market.is_active() && !market.is_closed(),
    }
}

pub fn matches_category(market: &Market, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Label(label) => market.resolved_category() == Some(label.as_str()),
    }
}

/// Markets without a usable volume never pass a threshold.
pub fn meets_min_volume(market: &Market, min_volume: Option<f64>) -> bool {
    match min_volume {
        None => true,
        Some(threshold) => market
            .resolved_volume()
            .is_some_and(|volume| volume >= threshold),
    }
}

/// Inclusive end-date window in unix milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub from_ms: Option<i64>,
    pub to_ms: Option<i64>,
}

impl DateBounds {
    /// `from` starts at local midnight, `to` ends at 23:59:59.999 local time.
    pub fn from_filters(filters: &FilterState) -> Self {
        Self {
            from_ms: filters.date_from.and_then(local_day_start_ms),
            to_ms: filters.date_to.and_then(local_day_end_ms),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from_ms.is_none() && self.to_ms.is_none()
    }

    /// With any bound set, a market needs a parseable end date inside the window.
    pub fn contains(&self, market: &Market) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(end) = market.end_timestamp_ms() else {
            return false;
        };
        self.from_ms.map_or(true, |from| end >= from) && self.to_ms.map_or(true, |to| end <= to)
    }
}

/// Apply every predicate in order: status, category, volume, date range.
pub fn filter_markets(markets: &[Market], filters: &FilterState) -> Vec<Market> {
    let min_volume = filters.volume_threshold.min_volume();
    let bounds = DateBounds::from_filters(filters);

    markets
        .iter()
        .filter(|market| matches_status(market, filters.status))
        .filter(|market| matches_category(market, &filters.category))
        .filter(|market| meets_min_volume(market, min_volume))
        .filter(|market| bounds.contains(market))
        .cloned()
        .collect()
}

fn sort_key(market: &Market, sort_by: SortOption) -> f64 {
    match sort_by {
        SortOption::Volume => market.resolved_volume().unwrap_or(0.0),
        SortOption::Liquidity => market.resolved_liquidity().unwrap_or(0.0),
        SortOption::EndingSoon => market.end_timestamp_ms().unwrap_or(0) as f64,
    }
}

/// Stable sort into a new list. Missing values sort as zero; descending
/// flips the comparison, so ties keep their input order either way.
pub fn sort_markets(markets: &[Market], sort_by: SortOption, direction: SortDirection) -> Vec<Market> {
    let mut keyed: Vec<(f64, &Market)> = markets
        .iter()
        .map(|market| (sort_key(market, sort_by), market))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, market)| market.clone()).collect()
}
