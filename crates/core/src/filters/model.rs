//! Filter state and its selector values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    #[default]
    Active,
    Resolved,
    All,
}

impl MarketStatus {
    pub const ALL: [MarketStatus; 3] = [Self::Active, Self::Resolved, Self::All];

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::All => "all",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_param() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Volume,
    Liquidity,
    EndingSoon,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [Self::Volume, Self::Liquidity, Self::EndingSoon];

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Liquidity => "liquidity",
            Self::EndingSoon => "ending-soon",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_param() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Volume => "Volume",
            Self::Liquidity => "Liquidity",
            Self::EndingSoon => "Ending soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "desc" => Some(Self::Desc),
            "asc" => Some(Self::Asc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Desc => "Descending",
            Self::Asc => "Ascending",
        }
    }
}

/// Category selector: a category label, or the `"all"` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Label(String),
}

impl CategoryFilter {
    pub fn from_param(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Label(value.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Label(label) => label,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from_param(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_param().to_string()
    }
}

/// Accepted minimum-volume thresholds in USD.
pub const VOLUME_OPTIONS: [u64; 4] = [10_000, 100_000, 1_000_000, 10_000_000];

/// Minimum volume selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum VolumeThreshold {
    #[default]
    Any,
    AtLeast(u64),
}

impl VolumeThreshold {
    /// Every selectable value, in display order.
    pub fn options() -> impl Iterator<Item = VolumeThreshold> {
        std::iter::once(Self::Any).chain(VOLUME_OPTIONS.into_iter().map(Self::AtLeast))
    }

    /// `"any"` or one of [`VOLUME_OPTIONS`] written exactly as digits.
    pub fn from_param(value: &str) -> Option<Self> {
        Self::options().find(|option| option.as_param() == value)
    }

    pub fn as_param(&self) -> String {
        match self {
            Self::Any => "any".to_string(),
            Self::AtLeast(amount) => amount.to_string(),
        }
    }

    pub fn min_volume(&self) -> Option<f64> {
        match self {
            Self::Any => None,
            Self::AtLeast(amount) => Some(*amount as f64),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => "Any volume",
            Self::AtLeast(10_000) => "≥ $10k",
            Self::AtLeast(100_000) => "≥ $100k",
            Self::AtLeast(1_000_000) => "≥ $1m",
            Self::AtLeast(10_000_000) => "≥ $10m",
            Self::AtLeast(_) => "Custom volume",
        }
    }
}

impl From<VolumeThreshold> for String {
    fn from(value: VolumeThreshold) -> Self {
        value.as_param()
    }
}

impl TryFrom<String> for VolumeThreshold {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_param(&value).ok_or_else(|| format!("unsupported volume threshold '{}'", value))
    }
}

/// Everything the user can set on the dashboard controls.
///
/// `query` holds the raw search text as typed; requests and the URL use the
/// debounced, trimmed copy kept by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub query: String,
    pub status: MarketStatus,
    pub sort_by: SortOption,
    pub sort_direction: SortDirection,
    pub category: CategoryFilter,
    pub volume_threshold: VolumeThreshold,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
