//! Request parameters derived from filter state.

use marketlens_market_data::{MarketsQuery, SearchQuery};

use crate::filters::MarketStatus;

pub const PAGE_SIZE: u32 = 50;
pub const SEARCH_LIMIT_PER_TYPE: u32 = 10;

fn base_markets_query() -> MarketsQuery {
    MarketsQuery {
        limit: Some(PAGE_SIZE),
        order: Some("id".to_string()),
        ascending: Some(false),
        ..Default::default()
    }
}

/// Primary listing request. `All` asks for active markets; closed ones come
/// from [`derive_closed_markets_query`].
pub fn derive_markets_query(status: MarketStatus) -> MarketsQuery {
    let mut query = base_markets_query();
    match status {
        MarketStatus::Active | MarketStatus::All => {
            query.active = Some(true);
            query.closed = Some(false);
        }
        MarketStatus::Resolved => query.closed = Some(true),
    }
    query
}

/// Supplemental closed-market request, only for `All`.
pub fn derive_closed_markets_query(status: MarketStatus) -> Option<MarketsQuery> {
    (status == MarketStatus::All).then(|| MarketsQuery {
        closed: Some(true),
        ..base_markets_query()
    })
}

/// Search request for the debounced text, or `None` when it is blank.
pub fn derive_search_query(search: &str, status: MarketStatus) -> Option<SearchQuery> {
    let q = search.trim();
    if q.is_empty() {
        return None;
    }
    let events_status = match status {
        MarketStatus::Active => Some("active".to_string()),
        MarketStatus::Resolved => Some("closed".to_string()),
        MarketStatus::All => None,
    };
    Some(SearchQuery {
        q: q.to_string(),
        limit_per_type: Some(SEARCH_LIMIT_PER_TYPE),
        search_tags: Some(false),
        search_profiles: Some(false),
        events_status,
        ..Default::default()
    })
}
