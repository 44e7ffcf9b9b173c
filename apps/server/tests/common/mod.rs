#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use marketlens_market_data::StubTransport;
use marketlens_server::{api::app_router, build_state_with_transport, config::Config};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub transport: Arc<StubTransport>,
    /// Keeps the static directory alive for the test's duration.
    pub static_dir: TempDir,
}

/// Router wired to `transport`, serving static files from a fresh temp dir.
pub fn test_app(transport: StubTransport) -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    let static_path = static_dir.path().to_string_lossy().to_string();
    let config = Config::from_lookup(|key| match key {
        "MARKETLENS_STATIC_DIR" => Some(static_path.clone()),
        "MARKETLENS_GAMMA_URL" => Some("http://gamma.test".to_string()),
        "MARKETLENS_CLOB_URL" => Some("http://clob.test".to_string()),
        "MARKETLENS_DATA_URL" => Some("http://data.test".to_string()),
        _ => None,
    })
    .unwrap();

    let transport = Arc::new(transport);
    let state = build_state_with_transport(&config, transport.clone());
    TestApp {
        router: app_router(state, &config),
        transport,
        static_dir,
    }
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
