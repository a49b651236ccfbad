use chrono::NaiveDate;
use indexmap::IndexMap;

use super::amount_bucket::ALL_AMOUNTS_KEY;

/// Selected amount bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SizeFilter {
    #[default]
    All,
    Bucket(String),
}

impl SizeFilter {
    pub fn key(&self) -> &str {
        match self {
            SizeFilter::All => ALL_AMOUNTS_KEY,
            SizeFilter::Bucket(key) => key,
        }
    }
}

impl From<String> for SizeFilter {
    fn from(key: String) -> Self {
        if key.is_empty() || key == ALL_AMOUNTS_KEY {
            SizeFilter::All
        } else {
            SizeFilter::Bucket(key)
        }
    }
}

impl From<&str> for SizeFilter {
    fn from(key: &str) -> Self {
        SizeFilter::from(key.to_string())
    }
}

impl From<SizeFilter> for String {
    fn from(size: SizeFilter) -> Self {
        size.key().to_string()
    }
}

/// Current fund-watch filters.
///
/// Dimensions combine with AND; values inside a multi-select dimension
/// combine with OR. An empty value in any dimension means no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text query.
    pub q: String,
    /// Selected categories.
    pub cat: Vec<String>,
    /// Selected stages.
    pub stage: Vec<String>,
    pub size: SizeFilter,
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
    /// Per-column accepted values, keyed by column in insertion order.
    pub cf: IndexMap<String, Vec<String>>,
}

impl FilterState {
    /// The query as typed, or `None` when it is empty.
    pub(crate) fn search_query(&self) -> Option<&str> {
        (!self.q.is_empty()).then_some(self.q.as_str())
    }

    pub(crate) fn has_date_bound(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Column filters that actually constrain something.
    pub(crate) fn active_column_filters(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.cf.iter().filter(|(_, values)| !values.is_empty())
    }
}
