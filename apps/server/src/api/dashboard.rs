use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use marketlens_core::{query::GammaSource, Dashboard, DashboardView, MemoryHistory};

/// Render the dashboard for a filter query string, once every enabled fetch settles.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Json<DashboardView> {
    let source = Arc::new(GammaSource::new(state.gamma.clone()));
    let history = MemoryHistory::new(raw.as_deref().unwrap_or_default());
    let mut dashboard = Dashboard::new(source, history);

    dashboard.settled().await;
    let view = dashboard.render();
    tracing::debug!(query = %view.query_string, "Rendered dashboard snapshot");
    Json(view)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
