//! Query hooks for market listing and market search.
//!
//! A hook is driven by calling `update` with its current inputs on every
//! render. It compares the inputs with the previous call and starts a new
//! fetch only when they changed, so re-rendering with structurally equal
//! parameters is free.

use std::sync::Arc;

use log::debug;
use marketlens_market_data::{Market, MarketsQuery, SearchQuery, SearchResponse};
use serde::Serialize;

use super::model::QueryState;
use super::runner::QueryRunner;
use super::traits::MarketsSource;

/// Structural identity of a parameter object. Absent parameters are `{}`.
pub fn params_key<P: Serialize>(params: Option<&P>) -> String {
    params
        .and_then(|params| serde_json::to_string(params).ok())
        .unwrap_or_else(|| "{}".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListDeps {
    key: String,
    enabled: bool,
    refetch_index: u64,
}

/// Fetches a market list for a [`MarketsQuery`].
pub struct MarketsQueryHook {
    source: Arc<dyn MarketsSource>,
    runner: QueryRunner<Vec<Market>>,
    params: Option<MarketsQuery>,
    deps: Option<ListDeps>,
    refetch_index: u64,
}

impl MarketsQueryHook {
    pub fn new(source: Arc<dyn MarketsSource>) -> Self {
        Self::with_initial_data(source, None)
    }

    /// Seed `data` before the first fetch lands.
    pub fn with_initial_data(source: Arc<dyn MarketsSource>, initial: Option<Vec<Market>>) -> Self {
        Self {
            source,
            runner: QueryRunner::new("markets", initial),
            params: None,
            deps: None,
            refetch_index: 0,
        }
    }

    /// Feed the current inputs. Fetches when the parameter key changes,
    /// when `enabled` turns on, and on the first call.
    pub fn update(&mut self, params: Option<&MarketsQuery>, enabled: bool) {
        let deps = ListDeps {
            key: params_key(params),
            enabled,
            refetch_index: self.refetch_index,
        };
        self.params = params.cloned();
        if self.deps.as_ref() == Some(&deps) {
            return;
        }
        self.deps = Some(deps);
        self.run();
    }

    /// Re-run the current fetch even though nothing changed.
    pub fn refetch(&mut self) {
        self.refetch_index += 1;
        self.runner.record_refetch();
        if let Some(deps) = self.deps.as_mut() {
            deps.refetch_index = self.refetch_index;
            self.run();
        }
    }

    fn run(&mut self) {
        let Some(deps) = &self.deps else {
            return;
        };
        if !deps.enabled {
            self.runner.stop(|state| state.is_loading = false);
            return;
        }

        debug!("Fetching markets for {}", deps.key);
        let source = Arc::clone(&self.source);
        let query = self.params.clone().unwrap_or_default();
        self.runner
            .start(async move { source.list_markets(&query).await });
    }

    pub fn state(&self) -> QueryState<Vec<Market>> {
        self.runner.state()
    }

    pub async fn settled(&self) -> QueryState<Vec<Market>> {
        self.runner.settled().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchDeps {
    key: String,
    trimmed: String,
    can_fetch: bool,
    refetch_index: u64,
}

/// Fetches search results for a [`SearchQuery`].
///
/// Only fetches while enabled with a non-blank `q`; the request carries the
/// trimmed text. A blank `q` clears the results.
pub struct MarketSearchHook {
    source: Arc<dyn MarketsSource>,
    runner: QueryRunner<SearchResponse>,
    params: Option<SearchQuery>,
    deps: Option<SearchDeps>,
    refetch_index: u64,
}

impl MarketSearchHook {
    pub fn new(source: Arc<dyn MarketsSource>) -> Self {
        Self::with_initial_data(source, None)
    }

    pub fn with_initial_data(source: Arc<dyn MarketsSource>, initial: Option<SearchResponse>) -> Self {
        Self {
            source,
            runner: QueryRunner::new("search", initial),
            params: None,
            deps: None,
            refetch_index: 0,
        }
    }

    pub fn update(&mut self, params: Option<&SearchQuery>, enabled: bool) {
        let trimmed = params
            .map(|params| params.q.trim().to_string())
            .unwrap_or_default();
        let deps = SearchDeps {
            key: params_key(params),
            can_fetch: enabled && !trimmed.is_empty(),
            trimmed,
            refetch_index: self.refetch_index,
        };
        self.params = params.cloned();
        if self.deps.as_ref() == Some(&deps) {
            return;
        }
        self.deps = Some(deps);
        self.run();
    }

    pub fn refetch(&mut self) {
        self.refetch_index += 1;
        self.runner.record_refetch();
        if let Some(deps) = self.deps.as_mut() {
            deps.refetch_index = self.refetch_index;
            self.run();
        }
    }

    fn run(&mut self) {
        let Some(deps) = &self.deps else {
            return;
        };
        if !deps.can_fetch {
            let clear_data = deps.trimmed.is_empty();
            self.runner.stop(|state| {
                state.is_loading = false;
                state.error = None;
                if clear_data {
                    state.data = None;
                }
            });
            return;
        }

        debug!("Searching markets for '{}'", deps.trimmed);
        let source = Arc::clone(&self.source);
        let mut query = self
            .params
            .clone()
            .unwrap_or_else(|| SearchQuery::new(deps.trimmed.clone()));
        query.q = deps.trimmed.clone();
        self.runner
            .start(async move { source.search_markets(&query).await });
    }

    pub fn state(&self) -> QueryState<SearchResponse> {
        self.runner.state()
    }

    pub async fn settled(&self) -> QueryState<SearchResponse> {
        self.runner.settled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_key_is_structural() {
        let a = MarketsQuery {
            limit: Some(50),
            active: Some(true),
            ..Default::default()
        };
        let b = MarketsQuery {
            active: Some(true),
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(params_key(Some(&a)), params_key(Some(&b)));
        assert_eq!(params_key::<MarketsQuery>(None), "{}");
        assert_eq!(params_key(Some(&MarketsQuery::default())), "{}");
    }
}
