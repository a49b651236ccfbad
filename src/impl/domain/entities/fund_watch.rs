use crate::domain::logic::{
    chip_synthesizer::active_chips, filter_predicates::filter_entries,
    quarter_deriver::derive_quarters,
};

use super::{
    chip::Chip, filter_state::FilterState, fund_entry::FundEntry, lookups::Lookups,
    quarter_bucket::QuarterBucket,
};

/// Raw data as loaded, before any derivation.
pub struct FundWatchRecords {
    pub entries: Vec<FundEntry>,
    pub lookups: Lookups,
}

/// A loaded fund-watch collection.
///
/// Quarter buckets are derived once here, since they only depend on the
/// entries; filtering and chips are recomputed per call.
#[derive(Debug, Clone)]
pub struct FundWatch {
    entries: Vec<FundEntry>,
    quarters: Vec<QuarterBucket>,
    lookups: Lookups,
}

impl FundWatch {
    pub fn new(entries: Vec<FundEntry>, lookups: Lookups) -> Self {
        let quarters = derive_quarters(&entries);
        Self {
            entries,
            quarters,
            lookups,
        }
    }

    pub fn entries(&self) -> &[FundEntry] {
        &self.entries
    }

    pub fn quarters(&self) -> &[QuarterBucket] {
        &self.quarters
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&FundEntry> {
        filter_entries(&self.entries, state, &self.lookups.amount_buckets)
    }

    pub fn chips(&self, state: &FilterState) -> Vec<Chip> {
        active_chips(
            state,
            &self.lookups.amount_buckets,
            &self.lookups.column_labels,
        )
    }

    /// Distinct values of a column, in first-seen order.
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .filter_map(|e| e.column_value(column))
            .filter(|v| !v.is_empty() && seen.insert(v.clone()))
            .collect()
    }
}
