//! Scripted [`MarketsSource`] shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marketlens_core::errors::{QueryError, Result};
use marketlens_core::query::MarketsSource;
use marketlens_market_data::{Market, MarketsQuery, SearchQuery, SearchResponse};
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// How the stub answers one list request.
pub enum ListReply {
    Markets(Vec<Market>),
    Fail(QueryError),
    /// Never resolves.
    Hang,
    /// Resolves with the markets once the sender fires (or is dropped).
    Gated(oneshot::Receiver<()>, Vec<Market>),
}

pub enum SearchReply {
    Results(SearchResponse),
    Fail(QueryError),
    Hang,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(MarketsQuery),
    Search(SearchQuery),
}

type ListResponder = Box<dyn Fn(&MarketsQuery) -> Vec<Market> + Send + Sync>;
type SearchResponder = Box<dyn Fn(&SearchQuery) -> SearchResponse + Send + Sync>;

/// Queued replies are used first; afterwards the responders answer.
pub struct StubSource {
    list_queue: Mutex<VecDeque<ListReply>>,
    search_queue: Mutex<VecDeque<SearchReply>>,
    list_responder: ListResponder,
    search_responder: SearchResponder,
    calls: Mutex<Vec<Call>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            list_queue: Mutex::new(VecDeque::new()),
            search_queue: Mutex::new(VecDeque::new()),
            list_responder: Box::new(|_| Vec::new()),
            search_responder: Box::new(|_| SearchResponse::default()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_list<F>(mut self, responder: F) -> Self
    where
        F: Fn(&MarketsQuery) -> Vec<Market> + Send + Sync + 'static,
    {
        self.list_responder = Box::new(responder);
        self
    }

    pub fn on_search<F>(mut self, responder: F) -> Self
    where
        F: Fn(&SearchQuery) -> SearchResponse + Send + Sync + 'static,
    {
        self.search_responder = Box::new(responder);
        self
    }

    pub fn queue_list(&self, reply: ListReply) {
        self.list_queue.lock().unwrap().push_back(reply);
    }

    pub fn queue_search(&self, reply: SearchReply) {
        self.search_queue.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<MarketsQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::List(query) => Some(query),
                Call::Search(_) => None,
            })
            .collect()
    }

    pub fn search_calls(&self) -> Vec<SearchQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(query) => Some(query),
                Call::List(_) => None,
            })
            .collect()
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl MarketsSource for StubSource {
    async fn list_markets(&self, query: &MarketsQuery) -> Result<Vec<Market>> {
        self.calls.lock().unwrap().push(Call::List(query.clone()));
        let queued = self.list_queue.lock().unwrap().pop_front();
        match queued {
            None => Ok((self.list_responder)(query)),
            Some(ListReply::Markets(markets)) => Ok(markets),
            Some(ListReply::Fail(err)) => Err(err),
            Some(ListReply::Hang) => std::future::pending().await,
            Some(ListReply::Gated(gate, markets)) => {
                let _ = gate.await;
                Ok(markets)
            }
        }
    }

    async fn search_markets(&self, query: &SearchQuery) -> Result<SearchResponse> {
        self.calls.lock().unwrap().push(Call::Search(query.clone()));
        let queued = self.search_queue.lock().unwrap().pop_front();
        match queued {
            None => Ok((self.search_responder)(query)),
            Some(SearchReply::Results(response)) => Ok(response),
            Some(SearchReply::Fail(err)) => Err(err),
            Some(SearchReply::Hang) => std::future::pending().await,
        }
    }
}

pub fn market(value: Value) -> Market {
    serde_json::from_value(value).expect("valid market fixture")
}

pub fn active_market(id: &str, category: &str, volume: f64) -> Market {
    market(json!({
        "id": id,
        "question": format!("Market {}", id),
        "category": category,
        "volumeNum": volume,
        "active": true,
        "closed": false
    }))
}

pub fn closed_market(id: &str, category: &str, volume: f64) -> Market {
    market(json!({
        "id": id,
        "question": format!("Market {}", id),
        "category": category,
        "volumeNum": volume,
        "active": false,
        "closed": true
    }))
}

/// Search response with one event holding `markets`.
pub fn search_response(markets: Vec<Market>) -> SearchResponse {
    serde_json::from_value(json!({
        "events": [{ "id": "event-1", "markets": markets }]
    }))
    .expect("valid search fixture")
}

pub fn ids(markets: &[Market]) -> Vec<String> {
    markets.iter().map(|m| m.id.clone()).collect()
}
