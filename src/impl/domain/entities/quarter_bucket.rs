use chrono::NaiveDate;

use crate::entities::FilterAction;

/// A calendar quarter offered as a date-range shortcut.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct QuarterBucket {
    /// "Q{1-4} {year}", unique within a derivation.
    pub label: String,
    /// First day of the quarter.
    pub from: NaiveDate,
    /// Last day of the quarter.
    pub to: NaiveDate,
}

impl QuarterBucket {
    /// Action that sets the date range to exactly this quarter.
    pub fn select_action(&self) -> FilterAction {
        FilterAction::SetDateRange {
            from: Some(self.from),
            to: Some(self.to),
        }
    }
}
