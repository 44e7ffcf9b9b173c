//! Filter state, local predicates and sorting.

mod model;
mod predicates;

pub use model::{
    CategoryFilter, FilterState, MarketStatus, SortDirection, SortOption, VolumeThreshold,
    VOLUME_OPTIONS,
};
pub use predicates::{
    filter_markets, matches_category, matches_status, meets_min_volume, sort_markets, DateBounds,
};
