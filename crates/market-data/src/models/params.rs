//! Flat query-parameter lists.
//!
//! [`QueryParams`] is the common currency between typed queries, the proxy's
//! inbound query strings and the outbound request URL.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::errors::MarketDataError;

/// One parameter value. Lists are written as repeated keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl QueryValue {
    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::Scalar(value) => std::slice::from_ref(value),
            QueryValue::List(values) => values,
        }
    }
}

/// Ordered `key -> value` pairs with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable parameter object.
    ///
    /// Null fields are skipped, arrays become repeated keys (null elements
    /// skipped, empty arrays omitted) and numbers print in their shortest
    /// form, so `50.0` is written as `50`.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, MarketDataError> {
        let value =
            serde_json::to_value(value).map_err(|e| MarketDataError::InvalidParams(e.to_string()))?;
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(MarketDataError::InvalidParams(format!(
                    "expected an object, found {}",
                    other
                )))
            }
        };

        let mut params = Self::default();
        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let values: Vec<String> = items.iter().filter_map(stringify).collect();
                    if !values.is_empty() {
                        params.0.push((key, QueryValue::List(values)));
                    }
                }
                other => {
                    if let Some(text) = stringify(&other) {
                        params.0.push((key, QueryValue::Scalar(text)));
                    }
                }
            }
        }
        Ok(params)
    }

    /// Group raw `(key, value)` pairs as they arrive on an inbound query string.
    ///
    /// Empty values are dropped. A key left with one value becomes a scalar,
    /// several values become a list, none drops the key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match grouped.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, values)) => values.push(value),
                None => grouped.push((key, vec![value])),
            }
        }

        Self(
            grouped
                .into_iter()
                .map(|(key, mut values)| {
                    let value = if values.len() == 1 {
                        QueryValue::Scalar(values.remove(0))
                    } else {
                        QueryValue::List(values)
                    };
                    (key, value)
                })
                .collect(),
        )
    }

    /// Set a scalar, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = QueryValue::Scalar(value.into());
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `application/x-www-form-urlencoded` form without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            for entry in value.values() {
                serializer.append_pair(key, entry);
            }
        }
        serializer.finish()
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(match (number.as_i64(), number.as_u64()) {
            (Some(int), _) => int.to_string(),
            (_, Some(uint)) => uint.to_string(),
            _ => number.as_f64().map(|float| float.to_string())?,
        }),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MarketsQuery;
    use serde_json::json;

    #[test]
    fn test_from_serializable_skips_nulls_and_expands_arrays() {
        let params = QueryParams::from_serializable(&json!({
            "limit": 50,
            "missing": null,
            "id": [1, null, 3],
            "slug": [],
            "active": true
        }))
        .unwrap();

        assert_eq!(params.get("missing"), None);
        assert_eq!(params.get("slug"), None);
        assert_eq!(
            params.get("id"),
            Some(&QueryValue::List(vec!["1".to_string(), "3".to_string()]))
        );
        assert_eq!(params.get("active"), Some(&QueryValue::Scalar("true".to_string())));
        assert_eq!(params.len(), 3);

        let ids = QueryParams::from_serializable(&json!({ "id": [1, null, 3] })).unwrap();
        assert_eq!(ids.to_query_string(), "id=1&id=3");
    }

    #[test]
    fn test_integral_floats_print_without_fraction() {
        let query = MarketsQuery {
            volume_num_min: Some(100000.0),
            liquidity_num_min: Some(2.5),
            ..Default::default()
        };
        let params = QueryParams::from_serializable(&query).unwrap();
        assert_eq!(
            params.get("volume_num_min"),
            Some(&QueryValue::Scalar("100000".to_string()))
        );
        assert_eq!(
            params.get("liquidity_num_min"),
            Some(&QueryValue::Scalar("2.5".to_string()))
        );
    }

    #[test]
    fn test_from_serializable_rejects_non_objects() {
        let err = QueryParams::from_serializable(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidParams(_)));
        assert!(QueryParams::from_serializable(&()).unwrap().is_empty());
    }

    #[test]
    fn test_from_pairs_collapses_and_drops_empty() {
        let params = QueryParams::from_pairs(vec![
            ("id".to_string(), "1".to_string()),
            ("order".to_string(), "id".to_string()),
            ("id".to_string(), "2".to_string()),
            ("tag".to_string(), String::new()),
            ("slug".to_string(), String::new()),
            ("slug".to_string(), "only".to_string()),
        ]);

        assert_eq!(params.len(), 3);
        assert_eq!(
            params.get("id"),
            Some(&QueryValue::List(vec!["1".to_string(), "2".to_string()]))
        );
        assert_eq!(params.get("order"), Some(&QueryValue::Scalar("id".to_string())));
        assert_eq!(params.get("slug"), Some(&QueryValue::Scalar("only".to_string())));
        assert_eq!(params.get("tag"), None);
    }

    #[test]
    fn test_query_string_encoding() {
        let mut params = QueryParams::new();
        params.insert("q", "fed rates & cpi");
        params.insert("q", "fed rates");
        assert_eq!(params.to_query_string(), "q=fed+rates");
    }
}
