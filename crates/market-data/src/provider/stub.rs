//! Scripted transport for tests, enabled by the `test-util` feature.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use url::Url;

use crate::errors::MarketDataError;

use super::traits::{HttpTransport, RawResponse};

enum StubReply {
    Response(RawResponse),
    Failure(String),
}

/// Scripted transport for tests.
///
/// Replies are matched on the request path. Unmatched paths answer 404.
/// Every requested URL is recorded.
#[derive(Default)]
pub struct StubTransport {
    routes: Vec<(String, StubReply)>,
    requests: Mutex<Vec<Url>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a JSON body and status.
    pub fn respond(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.push((
            path.to_string(),
            StubReply::Response(RawResponse::new(status, body)),
        ));
        self
    }

    /// Fail requests to `path` at the transport level.
    pub fn fail(mut self, path: &str, message: &str) -> Self {
        self.routes
            .push((path.to_string(), StubReply::Failure(message.to_string())));
        self
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &Url, _headers: &HeaderMap) -> Result<RawResponse, MarketDataError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }
        match self.routes.iter().find(|(path, _)| path == url.path()) {
            Some((_, StubReply::Response(response))) => Ok(response.clone()),
            Some((_, StubReply::Failure(message))) => Err(MarketDataError::Transport {
                message: message.clone(),
            }),
            None => Ok(RawResponse::new(404, "")),
        }
    }
}
