//! Combining result sets from several hooks into one list.

use std::collections::{BTreeSet, HashSet};

use marketlens_market_data::{Market, SearchResponse};

/// Primary markets followed by supplemental ones, deduplicated by id.
///
/// The first occurrence wins, so the primary set takes precedence. Markets
/// with an empty id are dropped.
pub fn merge_market_sets(primary: Option<&[Market]>, supplemental: Option<&[Market]>) -> Vec<Market> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::new();

    for market in primary
        .unwrap_or_default()
        .iter()
        .chain(supplemental.unwrap_or_default())
    {
        if market.id.is_empty() || !seen.insert(market.id.as_str()) {
            continue;
        }
        merged.push(market.clone());
    }
    merged
}

/// Markets embedded in search results, first occurrence per id.
pub fn flatten_search_markets(response: Option<&SearchResponse>) -> Vec<Market> {
    let Some(response) = response else {
        return Vec::new();
    };
    let mut seen: HashSet<&str> = HashSet::new();
    let mut collected = Vec::new();

    for market in response.events().iter().flat_map(|event| event.markets()) {
        if market.id.is_empty() || !seen.insert(market.id.as_str()) {
            continue;
        }
        collected.push(market.clone());
    }
    collected
}

/// Distinct resolved categories, sorted.
pub fn derive_categories(markets: &[Market]) -> Vec<String> {
    markets
        .iter()
        .filter_map(Market::resolved_category)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn market(id: &str, question: &str) -> Market {
        serde_json::from_value(json!({ "id": id, "question": question })).unwrap()
    }

    #[test]
    fn test_primary_takes_precedence() {
        let primary = vec![market("1", "primary"), market("2", "b")];
        let supplemental = vec![market("1", "supplemental"), market("3", "c")];

        let merged = merge_market_sets(Some(&primary), Some(&supplemental));

        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(merged[0].question.as_deref(), Some("primary"));
    }

    #[test]
    fn test_empty_ids_dropped_and_missing_sets_tolerated() {
        let primary = vec![market("", "anonymous"), market("1", "a")];
        assert_eq!(merge_market_sets(Some(&primary), None).len(), 1);
        assert!(merge_market_sets(None, None).is_empty());
    }

    #[test]
    fn test_flatten_search_markets() {
        let response: SearchResponse = serde_json::from_value(json!({
            "events": [
                { "id": "e1", "markets": [{ "id": "m1" }, { "id": "m2" }] },
                { "id": "e2", "markets": [{ "id": "m2", "question": "dup" }, { "id": "m3" }] },
                { "id": "e3" }
            ]
        }))
        .unwrap();

        let markets = flatten_search_markets(Some(&response));
        let ids: Vec<&str> = markets.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
        assert_eq!(markets[1].question, None);
        assert!(flatten_search_markets(None).is_empty());
    }

    #[test]
    fn test_derive_categories_sorted_and_distinct() {
        let markets: Vec<Market> = serde_json::from_value(json!([
            { "id": "1", "category": "Sports" },
            { "id": "2", "tags": [{ "label": "Crypto" }] },
            { "id": "3", "category": "Sports" },
            { "id": "4" }
        ]))
        .unwrap();

        assert_eq!(derive_categories(&markets), vec!["Crypto", "Sports"]);
    }
}
