//! Dashboard session: filter state, debounced search, three query hooks and
//! URL sync, rendered into a [`DashboardView`].
//!
//! Setters update the filter state and immediately re-derive the hook inputs
//! and the query string. Search text goes through a 300 ms debounce first;
//! the caller drives it with [`Dashboard::tick`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use marketlens_market_data::Market;

use super::merge::{derive_categories, flatten_search_markets, merge_market_sets};
use super::params::{derive_closed_markets_query, derive_markets_query, derive_search_query};
use super::view::{empty_message, heading, DashboardView, MarketRow, ResultArea};
use crate::filters::{
    filter_markets, sort_markets, CategoryFilter, FilterState, MarketStatus, SortDirection,
    SortOption, VolumeThreshold,
};
use crate::query::{MarketSearchHook, MarketsQueryHook, MarketsSource};
use crate::url_sync::{History, UrlSync};
use crate::utils::Debouncer;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct Dashboard<H: History> {
    filters: FilterState,
    /// Debounced, trimmed search text. Non-empty means search mode.
    search: String,
    debouncer: Debouncer<String>,
    url: UrlSync<H>,
    markets: MarketsQueryHook,
    closed_markets: MarketsQueryHook,
    search_results: MarketSearchHook,
}

impl<H: History> Dashboard<H> {
    /// Start a session from the history's current query string.
    ///
    /// Must be called from within a Tokio runtime: the initial fetches start here.
    pub fn new(source: Arc<dyn MarketsSource>, history: H) -> Self {
        let mut url = UrlSync::new(history);
        let filters = url.initialize().unwrap_or_default();
        let search = filters.query.trim().to_string();

        let mut dashboard = Self {
            filters,
            search,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            url,
            markets: MarketsQueryHook::new(Arc::clone(&source)),
            closed_markets: MarketsQueryHook::new(Arc::clone(&source)),
            search_results: MarketSearchHook::new(source),
        };
        dashboard.sync();
        dashboard
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The debounced search text driving requests and the URL.
    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn history(&self) -> &H {
        self.url.history()
    }

    pub fn markets(&self) -> &MarketsQueryHook {
        &self.markets
    }

    pub fn closed_markets(&self) -> &MarketsQueryHook {
        &self.closed_markets
    }

    pub fn search_results(&self) -> &MarketSearchHook {
        &self.search_results
    }

    // ========================================================================
    // Search text
    // ========================================================================

    /// Record a keystroke. The search applies once the text has been stable
    /// for [`SEARCH_DEBOUNCE`].
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.debouncer.push(text.trim().to_string(), now);
        self.filters.query = text;
    }

    /// Apply the pending search text if its settle window has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(search) => self.apply_search(search),
            None => false,
        }
    }

    /// Apply the pending search text immediately.
    pub fn flush_debounce(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(search) => self.apply_search(search),
            None => false,
        }
    }

    /// When the next [`Dashboard::tick`] can apply a pending search.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn apply_search(&mut self, search: String) -> bool {
        if search == self.search {
            return false;
        }
        debug!("Search text settled on '{}'", search);
        self.search = search;
        self.sync();
        true
    }

    // ========================================================================
    // Selectors
    // ========================================================================

    pub fn set_status(&mut self, status: MarketStatus) {
        self.filters.status = status;
        self.sync();
    }

    pub fn set_sort_by(&mut self, sort_by: SortOption) {
        self.filters.sort_by = sort_by;
        self.sync();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.filters.sort_direction = direction;
        self.sync();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filters.category = category;
        self.sync();
    }

    pub fn set_volume_threshold(&mut self, threshold: VolumeThreshold) {
        self.filters.volume_threshold = threshold;
        self.sync();
    }

    pub fn set_date_range(&mut self, from: Option<chrono::NaiveDate>, to: Option<chrono::NaiveDate>) {
        self.filters.date_from = from;
        self.filters.date_to = to;
        self.sync();
    }

    /// Reset every filter, including the search text, to its default.
    pub fn clear_filters(&mut self) {
        info!("Clearing dashboard filters");
        self.debouncer.cancel();
        self.filters = FilterState::default();
        self.search.clear();
        self.sync();
    }

    /// Re-run every enabled hook.
    pub fn refetch(&mut self) {
        self.markets.refetch();
        self.closed_markets.refetch();
        self.search_results.refetch();
    }

    /// Push the current filters into the hooks and the query string.
    fn sync(&mut self) {
        let status = self.filters.status;

        let markets_query = derive_markets_query(status);
        self.markets.update(Some(&markets_query), true);

        let closed_query = derive_closed_markets_query(status);
        self.closed_markets
            .update(closed_query.as_ref(), closed_query.is_some());

        let search_query = derive_search_query(&self.search, status);
        self.search_results
            .update(search_query.as_ref(), search_query.is_some());

        self.url.sync(&self.filters, &self.search);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Wait for every hook to finish loading.
    pub async fn settled(&self) {
        futures::join!(
            self.markets.settled(),
            self.closed_markets.settled(),
            self.search_results.settled()
        );
    }

    /// Build the view from the hooks' latest snapshots.
    ///
    /// A selected category that no longer appears among the derived
    /// categories resets to "all" here, but only once the hooks feeding the
    /// view have stopped loading. Rendering while a search is in flight keeps
    /// the stale selection rather than resetting on the very next render.
    pub fn render(&mut self) -> DashboardView {
        let has_search = !self.search.is_empty();
        let markets = self.markets.state();
        let closed_markets = self.closed_markets.state();
        let search_results = self.search_results.state();

        let combined = merge_market_sets(markets.data.as_deref(), closed_markets.data.as_deref());
        let base: Vec<Market> = if has_search {
            flatten_search_markets(search_results.data.as_ref())
        } else {
            combined.clone()
        };
        let categories = derive_categories(&base);

        let (is_loading, error) = if has_search {
            (search_results.is_loading, search_results.error)
        } else {
            (
                markets.is_loading || closed_markets.is_loading,
                markets.error.or(closed_markets.error),
            )
        };

        let stale_category = match &self.filters.category {
            CategoryFilter::Label(label) if !is_loading && !categories.contains(label) => {
                Some(label.clone())
            }
            _ => None,
        };
        if let Some(label) = stale_category {
            debug!("Category '{}' no longer available, resetting", label);
            self.filters.category = CategoryFilter::All;
            self.url.sync(&self.filters, &self.search);
        }

        let result = if is_loading {
            ResultArea::Loading
        } else if let Some(error) = error {
            ResultArea::Error(error.to_string())
        } else {
            let filtered = filter_markets(&base, &self.filters);
            let sorted = sort_markets(
                &filtered,
                self.filters.sort_by,
                self.filters.sort_direction,
            );
            if sorted.is_empty() {
                ResultArea::Empty(empty_message(&self.search, self.filters.status))
            } else {
                ResultArea::Markets(sorted.iter().map(MarketRow::from).collect())
            }
        };

        let counts_ready = !markets.is_loading;
        DashboardView {
            heading: heading(&self.search),
            result,
            categories,
            live_count: counts_ready.then(|| combined.iter().filter(|m| m.is_active()).count()),
            resolved_count: counts_ready.then(|| combined.iter().filter(|m| m.is_closed()).count()),
            query_string: self.url.query(),
        }
    }
}
