//! Gamma market model and its resolved-value accessors.
//!
//! The provider adds fields over time, so [`Market`] types only the fields the
//! dashboard reads and keeps everything else in [`Market::extra`]. Serializing
//! a decoded market gives back every field the provider sent.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::event::Event;

/// A numeric field the provider sends either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// Numeric value, if finite. Blank strings read as zero.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
        };
        value.is_finite().then_some(value)
    }
}

/// A list field the provider sends either as a JSON array or as a JSON-encoded string
/// (e.g. `"[\"Yes\", \"No\"]"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    List(Vec<String>),
    Encoded(String),
}

impl StringList {
    /// Decoded entries. An encoded string that is not a JSON array yields nothing.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::List(values) => values.clone(),
            Self::Encoded(raw) => serde_json::from_str::<Vec<String>>(raw).unwrap_or_default(),
        }
    }
}

/// Category object attached to a market.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub id: Option<String>,
    pub label: Option<String>,
    pub parent_category: Option<String>,
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tag object attached to markets and events.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub id: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single tradable prediction market.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Provider identifier. Numeric ids are stringified; a missing id decodes as empty.
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub id: String,
    pub question: Option<String>,
    pub condition_id: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
    pub events: Option<Vec<Event>>,
    pub volume: Option<NumberOrString>,
    /// Numeric strings are accepted; any other non-numeric value reads as absent.
    #[serde(default, deserialize_with = "de_opt_lenient_f64")]
    pub volume_num: Option<f64>,
    pub liquidity: Option<NumberOrString>,
    #[serde(default, deserialize_with = "de_opt_lenient_f64")]
    pub liquidity_num: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub end_date_iso: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub outcomes: Option<StringList>,
    pub outcome_prices: Option<StringList>,
    pub clob_token_ids: Option<StringList>,
    /// Every field not modelled above, preserved as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Coarse lifecycle label shown next to a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatusBadge {
    Resolved,
    Active,
    Inactive,
}

impl MarketStatusBadge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resolved => "Resolved",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl Market {
    pub fn is_active(&self) -> bool {
        self.active == Some(true)
    }

    pub fn is_closed(&self) -> bool {
        self.closed == Some(true)
    }

    /// Question, else slug, else a placeholder.
    pub fn display_name(&self) -> &str {
        non_empty(self.question.as_deref())
            .or_else(|| non_empty(self.slug.as_deref()))
            .unwrap_or("Untitled market")
    }

    /// Category label resolved through the fallback chain: own `category`,
    /// first category object, first tag, first related event.
    pub fn resolved_category(&self) -> Option<&str> {
        if let Some(category) = non_empty(self.category.as_deref()) {
            return Some(category);
        }
        if let Some(label) = self
            .categories
            .as_ref()
            .and_then(|categories| categories.first())
            .and_then(|category| non_empty(category.label.as_deref()))
        {
            return Some(label);
        }
        if let Some(label) = self
            .tags
            .as_ref()
            .and_then(|tags| tags.first())
            .and_then(|tag| non_empty(tag.label.as_deref()))
        {
            return Some(label);
        }
        self.events
            .as_ref()
            .and_then(|events| events.first())
            .and_then(|event| non_empty(event.category.as_deref()))
    }

    /// `volumeNum` when present, else the numeric parse of the raw `volume` field.
    pub fn resolved_volume(&self) -> Option<f64> {
        self.volume_num
            .filter(|value| value.is_finite())
            .or_else(|| self.volume.as_ref().and_then(NumberOrString::as_f64))
    }

    pub fn resolved_liquidity(&self) -> Option<f64> {
        self.liquidity_num.filter(|value| value.is_finite())
    }

    /// End of trading in unix milliseconds, from `endDateIso` else `endDate`.
    pub fn end_timestamp_ms(&self) -> Option<i64> {
        if let Some(iso) = non_empty(self.end_date_iso.as_deref()) {
            return parse_timestamp_ms(iso);
        }
        non_empty(self.end_date.as_deref()).and_then(parse_timestamp_ms)
    }

    pub fn status_badge(&self) -> MarketStatusBadge {
        if self.is_closed() {
            MarketStatusBadge::Resolved
        } else if self.is_active() {
            MarketStatusBadge::Active
        } else {
            MarketStatusBadge::Inactive
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse a provider timestamp into unix milliseconds.
///
/// RFC 3339 strings honour their offset, offset-less date-times are local
/// time and bare dates are UTC midnight.
pub fn parse_timestamp_ms(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.timestamp_millis());
        }
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).timestamp_millis())
}

pub(crate) fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_string_or_number(deserializer)?.unwrap_or_default())
}

pub(crate) fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

/// A number, or a string holding one. Anything else decodes as `None`
/// instead of failing the whole market.
fn de_opt_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
