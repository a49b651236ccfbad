use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{domain::logic::utils::parse_date_bound, errors::InvalidDateRange};

use super::filter_state::SizeFilter;

/// A single change to the filter state. Every control in the filter bar, and
/// every chip's removal, is expressed as one of these and applied through
/// [`reduce`](crate::logic::reduce).
#[derive(Debug, Clone, PartialEq)]
#[derive(serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterAction {
    SetSearch(String),
    SetCategories(Vec<String>),
    ToggleCategory(String),
    RemoveCategory(String),
    SetStages(Vec<String>),
    ToggleStage(String),
    RemoveStage(String),
    SetSize(SizeFilter),
    SetDateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    ClearDateRange,
    SetColumnFilter {
        column: String,
        values: Vec<String>,
    },
    RemoveColumnValue {
        column: String,
        value: String,
    },
    ClearAll,
}

impl FilterAction {
    /// Builds a date-range action from the raw input values. Empty strings
    /// leave that side unbounded.
    pub fn date_range_from_iso(from: &str, to: &str) -> Result<FilterAction, ServerError> {
        let from_date = parse_date_bound(from)?;
        let to_date = parse_date_bound(to)?;
        if let (Some(f), Some(t)) = (from_date, to_date) {
            if f > t {
                return Err(InvalidDateRange::new(from.trim(), to.trim()));
            }
        }
        Ok(FilterAction::SetDateRange {
            from: from_date,
            to: to_date,
        })
    }
}
