use std::collections::HashSet;

use chrono::Datelike as _;

use crate::entities::{FundEntry, QuarterBucket};

use super::utils::{quarter_bounds, quarter_of};

/// Quarter buckets covering the announcement dates of the given entries,
/// most recent first. Undated entries are skipped.
pub fn derive_quarters(entries: &[FundEntry]) -> Vec<QuarterBucket> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut quarters: Vec<QuarterBucket> = entries
        .iter()
        .filter_map(|e| e.announcement_date)
        .filter_map(|date| {
            let (year, quarter) = (date.year(), quarter_of(date));
            let label = format!("Q{} {}", quarter, year);
            if seen.contains(&label) {
                return None;
            }
            let (from, to) = quarter_bounds(year, quarter)?;
            seen.insert(label.clone());
            Some(QuarterBucket { label, from, to })
        })
        .collect();
    quarters.sort_by(|a, b| b.from.cmp(&a.from));
    quarters
}
