//! Filter/sort/merge controller and the dashboard session built on it.

mod dashboard;
mod merge;
mod params;
mod view;

pub use dashboard::{Dashboard, SEARCH_DEBOUNCE};
pub use merge::{derive_categories, flatten_search_markets, merge_market_sets};
pub use params::{
    derive_closed_markets_query, derive_markets_query, derive_search_query, PAGE_SIZE,
    SEARCH_LIMIT_PER_TYPE,
};
pub use view::{empty_message, heading, DashboardView, MarketRow, ResultArea};
