//! Pass-through routes to Gamma and the CLOB.
//!
//! Inbound query parameters are forwarded as-is, except that empty values are
//! dropped and repeated keys are grouped. Responses are never cacheable.

use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use marketlens_market_data::QueryParams;
use serde_json::Value;

fn collect_params(raw: Option<String>) -> ApiResult<QueryParams> {
    let pairs: Vec<(String, String)> = match raw {
        Some(query) => serde_urlencoded::from_str(&query)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?,
        None => Vec::new(),
    };
    Ok(QueryParams::from_pairs(pairs))
}

fn no_store(result: ApiResult<Json<Value>>) -> Response {
    let mut response = result.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

async fn forward_markets(state: &AppState, raw: Option<String>) -> ApiResult<Json<Value>> {
    let params = collect_params(raw)?;
    Ok(Json(state.gamma.list_markets_raw(&params).await?))
}

async fn forward_search(state: &AppState, raw: Option<String>) -> ApiResult<Json<Value>> {
    let params = collect_params(raw)?;
    Ok(Json(state.gamma.search_raw(&params).await?))
}

async fn forward_book(state: &AppState, raw: Option<String>) -> ApiResult<Json<Value>> {
    let params = collect_params(raw)?;
    Ok(Json(state.clob.order_book_raw(&params).await?))
}

async fn forward_price_history(state: &AppState, raw: Option<String>) -> ApiResult<Json<Value>> {
    let params = collect_params(raw)?;
    Ok(Json(state.clob.price_history_raw(&params).await?))
}

async fn proxy_markets(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    no_store(forward_markets(&state, raw).await)
}

async fn proxy_search(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    no_store(forward_search(&state, raw).await)
}

async fn proxy_book(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    no_store(forward_book(&state, raw).await)
}

async fn proxy_price_history(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    no_store(forward_price_history(&state, raw).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/markets", get(proxy_markets))
        .route("/search", get(proxy_search))
        .route("/book", get(proxy_book))
        .route("/prices-history", get(proxy_price_history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketlens_market_data::QueryValue;

    #[test]
    fn test_collect_params_groups_and_drops_empty() {
        let params =
            collect_params(Some("id=1&id=2&slug=&active=true&tag=a&tag=".to_string())).unwrap();

        assert_eq!(
            params.get("id"),
            Some(&QueryValue::List(vec!["1".to_string(), "2".to_string()]))
        );
        assert_eq!(
            params.get("active"),
            Some(&QueryValue::Scalar("true".to_string()))
        );
        assert_eq!(params.get("tag"), Some(&QueryValue::Scalar("a".to_string())));
        assert_eq!(params.get("slug"), None);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_collect_params_without_query() {
        assert!(collect_params(None).unwrap().is_empty());
    }
}
