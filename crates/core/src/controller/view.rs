//! Render model for the dashboard.

use marketlens_market_data::{Market, MarketStatusBadge};
use serde::Serialize;

use crate::filters::MarketStatus;

/// One row in the market table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRow {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub status: MarketStatusBadge,
    pub status_label: &'static str,
    pub category: Option<String>,
    pub volume: Option<f64>,
    pub liquidity: Option<f64>,
    pub end_timestamp_ms: Option<i64>,
}

impl From<&Market> for MarketRow {
    fn from(market: &Market) -> Self {
        let status = market.status_badge();
        Self {
            id: market.id.clone(),
            name: market.display_name().to_string(),
            slug: market.slug.clone(),
            status,
            status_label: status.label(),
            category: market.resolved_category().map(str::to_string),
            volume: market.resolved_volume(),
            liquidity: market.resolved_liquidity(),
            end_timestamp_ms: market.end_timestamp_ms(),
        }
    }
}

/// What the result area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ResultArea {
    Loading,
    Error(String),
    Empty(String),
    Markets(Vec<MarketRow>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub heading: String,
    pub result: ResultArea,
    pub categories: Vec<String>,
    /// Active markets in the merged listing; absent while the primary listing loads.
    pub live_count: Option<usize>,
    pub resolved_count: Option<usize>,
    pub query_string: String,
}

pub fn heading(search: &str) -> String {
    if search.is_empty() {
        "Showing market snapshots from Gamma".to_string()
    } else {
        format!("Search results for \"{}\"", search)
    }
}

pub fn empty_message(search: &str, status: MarketStatus) -> String {
    if !search.is_empty() {
        return format!(
            "No markets match \"{}\". Try a different search or clear filters.",
            search
        );
    }
    match status {
        MarketStatus::Resolved => "No resolved markets available for this view.".to_string(),
        MarketStatus::Active => "No active markets available right now.".to_string(),
        MarketStatus::All => "No markets found for the current filters.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_messages() {
        assert_eq!(
            empty_message("fed", MarketStatus::Resolved),
            "No markets match \"fed\". Try a different search or clear filters."
        );
        assert_eq!(
            empty_message("", MarketStatus::Resolved),
            "No resolved markets available for this view."
        );
        assert_eq!(
            empty_message("", MarketStatus::Active),
            "No active markets available right now."
        );
        assert_eq!(
            empty_message("", MarketStatus::All),
            "No markets found for the current filters."
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(""), "Showing market snapshots from Gamma");
        assert_eq!(heading("fed"), "Search results for \"fed\"");
    }

    #[test]
    fn test_market_row_uses_resolved_values() {
        let market: Market = serde_json::from_value(json!({
            "id": "9",
            "slug": "will-it-rain",
            "volume": "1500",
            "liquidityNum": 20,
            "closed": true,
            "tags": [{ "label": "Weather" }]
        }))
        .unwrap();

        let row = MarketRow::from(&market);
        assert_eq!(row.name, "will-it-rain");
        assert_eq!(row.status_label, "Resolved");
        assert_eq!(row.category.as_deref(), Some("Weather"));
        assert_eq!(row.volume, Some(1500.0));
        assert_eq!(row.liquidity, Some(20.0));
    }

    #[test]
    fn test_result_area_serialization() {
        assert_eq!(
            serde_json::to_value(ResultArea::Loading).unwrap(),
            json!({ "kind": "loading" })
        );
        assert_eq!(
            serde_json::to_value(ResultArea::Error("boom".to_string())).unwrap(),
            json!({ "kind": "error", "value": "boom" })
        );
    }
}
