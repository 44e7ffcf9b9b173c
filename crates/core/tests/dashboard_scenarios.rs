//! End-to-end dashboard scenarios: filter state in, rendered view out.

mod common;

use std::time::{Duration, Instant};

use common::{active_market, closed_market, market, search_response, ListReply, StubSource};
use marketlens_core::controller::{Dashboard, ResultArea, SEARCH_DEBOUNCE};
use marketlens_core::errors::QueryError;
use marketlens_core::filters::{CategoryFilter, MarketStatus, VolumeThreshold};
use marketlens_core::url_sync::MemoryHistory;
use marketlens_market_data::MarketsQuery;
use serde_json::json;

fn row_ids(result: &ResultArea) -> Vec<String> {
    match result {
        ResultArea::Markets(rows) => rows.iter().map(|row| row.id.clone()).collect(),
        other => panic!("expected market rows, got {:?}", other),
    }
}

fn is_closed_query(query: &MarketsQuery) -> bool {
    query.closed == Some(true)
}

#[tokio::test]
async fn test_active_status_filters_inactive_markets_locally() {
    let stub = StubSource::new()
        .on_list(|_| {
            vec![
                active_market("live", "Sports", 10.0),
                market(json!({ "id": "paused", "active": false, "closed": false })),
            ]
        })
        .into_arc();
    let mut dashboard = Dashboard::new(stub.clone(), MemoryHistory::new(""));

    dashboard.settled().await;
    let view = dashboard.render();

    assert_eq!(row_ids(&view.result), vec!["live"]);
    let sent = serde_json::to_value(&stub.list_calls()[0]).unwrap();
    assert_eq!(
        sent,
        json!({ "limit": 50, "order": "id", "ascending": false, "active": true, "closed": false })
    );
}

#[tokio::test]
async fn test_debounced_search_issues_one_fetch() {
    let stub = StubSource::new()
        .on_search(|_| search_response(vec![active_market("m1", "Macro", 1.0)]))
        .into_arc();
    let mut dashboard = Dashboard::new(stub.clone(), MemoryHistory::new(""));
    let start = Instant::now();

    dashboard.set_query("f", start);
    dashboard.set_query("fe", start + Duration::from_millis(100));
    dashboard.set_query("fed", start + Duration::from_millis(200));

    assert!(!dashboard.tick(start + Duration::from_millis(450)));
    assert!(stub.search_calls().is_empty());
    assert_eq!(
        dashboard.next_deadline(),
        Some(start + Duration::from_millis(200) + SEARCH_DEBOUNCE)
    );

    assert!(dashboard.tick(start + Duration::from_millis(500)));
    dashboard.settled().await;
    let view = dashboard.render();

    let sent = stub.search_calls();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].q, "fed");
    assert_eq!(sent[0].events_status.as_deref(), Some("active"));
    assert_eq!(view.heading, "Search results for \"fed\"");
    assert_eq!(view.query_string, "q=fed");
    assert_eq!(row_ids(&view.result), vec!["m1"]);
}

#[tokio::test]
async fn test_volume_threshold_is_inclusive() {
    let stub = StubSource::new()
        .on_list(|_| {
            vec![
                active_market("below", "Sports", 99_999.0),
                active_market("at", "Sports", 100_000.0),
            ]
        })
        .into_arc();
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new("minVolume=100000"));

    assert_eq!(
        dashboard.filters().volume_threshold,
        VolumeThreshold::AtLeast(100_000)
    );
    dashboard.settled().await;

    assert_eq!(row_ids(&dashboard.render().result), vec!["at"]);
}

#[tokio::test]
async fn test_date_range_uses_local_day_bounds() {
    let stub = StubSource::new()
        .on_list(|_| {
            vec![
                market(json!({ "id": "feb", "active": true, "endDate": "2026-02-01T00:00:00" })),
                market(json!({ "id": "jan", "active": true, "endDate": "2026-01-31T23:59:59" })),
                market(json!({ "id": "undated", "active": true })),
            ]
        })
        .into_arc();
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new("from=2026-01-01&to=2026-01-31"));

    dashboard.settled().await;

    assert_eq!(row_ids(&dashboard.render().result), vec!["jan"]);
}

#[tokio::test]
async fn test_missing_category_resets_after_search_settles() {
    let stub = StubSource::new()
        .on_list(|_| vec![active_market("c1", "Crypto", 5.0)])
        .on_search(|_| search_response(vec![active_market("s1", "Sports", 5.0)]))
        .into_arc();
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new("category=Crypto"));

    dashboard.settled().await;
    let view = dashboard.render();
    assert_eq!(dashboard.filters().category, CategoryFilter::Label("Crypto".to_string()));
    assert_eq!(view.categories, vec!["Crypto"]);
    assert_eq!(row_ids(&view.result), vec!["c1"]);

    dashboard.set_query("fed", Instant::now());
    dashboard.flush_debounce();
    let loading = dashboard.render();
    assert_eq!(loading.result, ResultArea::Loading);
    assert_eq!(dashboard.filters().category, CategoryFilter::Label("Crypto".to_string()));

    dashboard.settled().await;
    let view = dashboard.render();
    assert_eq!(dashboard.filters().category, CategoryFilter::All);
    assert_eq!(view.categories, vec!["Sports"]);
    assert_eq!(row_ids(&view.result), vec!["s1"]);
    assert_eq!(view.query_string, "q=fed");
}

#[tokio::test]
async fn test_hung_fetch_superseded_by_status_change() {
    let stub = StubSource::new()
        .on_list(|_| vec![closed_market("done", "Macro", 1.0)])
        .into_arc();
    stub.queue_list(ListReply::Hang);
    let mut dashboard = Dashboard::new(stub.clone(), MemoryHistory::new(""));

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(stub.list_calls().len(), 1);
    assert_eq!(dashboard.render().result, ResultArea::Loading);

    dashboard.set_status(MarketStatus::Resolved);
    dashboard.settled().await;
    let view = dashboard.render();

    assert_eq!(row_ids(&view.result), vec!["done"]);
    assert_eq!(
        dashboard.markets().state().data.map(|markets| markets.len()),
        Some(1)
    );
}

#[tokio::test]
async fn test_all_status_merges_supplemental_closed_markets() {
    let stub = StubSource::new()
        .on_list(|query| {
            if is_closed_query(query) {
                vec![
                    closed_market("shared", "Macro", 1.0),
                    closed_market("closed-1", "Politics", 3.0),
                ]
            } else {
                vec![
                    active_market("shared", "Macro", 2.0),
                    active_market("live-1", "Crypto", 5.0),
                ]
            }
        })
        .into_arc();
    let mut dashboard = Dashboard::new(stub.clone(), MemoryHistory::new("status=all"));

    dashboard.settled().await;
    let view = dashboard.render();

    assert_eq!(stub.list_calls().len(), 2);
    assert_eq!(row_ids(&view.result), vec!["live-1", "closed-1", "shared"]);
    assert_eq!(view.categories, vec!["Crypto", "Macro", "Politics"]);
    assert_eq!(view.live_count, Some(2));
    assert_eq!(view.resolved_count, Some(1));
    assert_eq!(view.query_string, "status=all");
}

#[tokio::test]
async fn test_first_error_is_shown() {
    let stub = StubSource::new().into_arc();
    stub.queue_list(ListReply::Fail(QueryError::Response {
        status: 502,
        message: "Gamma unavailable".to_string(),
    }));
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new(""));

    dashboard.settled().await;

    assert_eq!(
        dashboard.render().result,
        ResultArea::Error("Gamma unavailable".to_string())
    );
}

#[tokio::test]
async fn test_empty_resolved_view_message() {
    let stub = StubSource::new().into_arc();
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new("status=resolved"));

    dashboard.settled().await;

    assert_eq!(
        dashboard.render().result,
        ResultArea::Empty("No resolved markets available for this view.".to_string())
    );
}

#[tokio::test]
async fn test_counts_absent_while_primary_loads() {
    let stub = StubSource::new().into_arc();
    stub.queue_list(ListReply::Hang);
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new(""));

    let view = dashboard.render();

    assert_eq!(view.live_count, None);
    assert_eq!(view.resolved_count, None);
    assert_eq!(view.heading, "Showing market snapshots from Gamma");
}

#[tokio::test]
async fn test_clear_filters_resets_url() {
    let stub = StubSource::new().into_arc();
    let mut dashboard = Dashboard::new(
        stub,
        MemoryHistory::new("q=fed&status=resolved&sort=liquidity&dir=asc&minVolume=10000"),
    );
    assert_eq!(dashboard.search_text(), "fed");

    dashboard.clear_filters();

    assert!(dashboard.filters().is_default());
    assert_eq!(dashboard.search_text(), "");
    assert_eq!(dashboard.history().replacements().last().map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_url_only_replaced_on_change() {
    let stub = StubSource::new().into_arc();
    let mut dashboard = Dashboard::new(stub, MemoryHistory::new("status=resolved"));

    dashboard.set_status(MarketStatus::Resolved);
    assert!(dashboard.history().replacements().is_empty());

    dashboard.set_status(MarketStatus::All);
    dashboard.set_volume_threshold(VolumeThreshold::AtLeast(10_000));
    assert_eq!(
        dashboard.history().replacements(),
        ["status=all", "status=all&minVolume=10000"]
    );
}
