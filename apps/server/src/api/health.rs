use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Router};

async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the Data API answers its health probe.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.data_api.health().await.map_err(|e| {
        tracing::warn!("Readiness probe failed: {}", e);
        ApiError::Unavailable(e.to_string())
    })?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
