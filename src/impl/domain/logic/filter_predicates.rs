use chrono::NaiveDate;

use crate::entities::{AmountBucket, AmountBuckets, FilterState, FundEntry, SizeFilter};

/// Filter state resolved against the lookup tables, so that per-entry checks
/// don't repeat bucket lookups or query lowercasing.
struct Predicates<'a> {
    categories: &'a [String],
    stages: &'a [String],
    bucket: Option<&'a AmountBucket>,
    date_range: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
    columns: Vec<(&'a str, &'a [String])>,
    query: Option<String>,
}

impl<'a> Predicates<'a> {
    fn new(state: &'a FilterState, buckets: &'a AmountBuckets) -> Self {
        let bucket = match &state.size {
            SizeFilter::All => None,
            SizeFilter::Bucket(key) => {
                let bucket = buckets.get(key);
                if bucket.is_none() {
                    tracing::warn!(size = %key, "unknown amount bucket; not filtering by amount");
                }
                bucket
            }
        };
        Self {
            categories: &state.cat,
            stages: &state.stage,
            bucket,
            date_range: state.has_date_bound().then_some((state.from, state.to)),
            columns: state
                .active_column_filters()
                .map(|(column, values)| (column.as_str(), values.as_slice()))
                .collect(),
            query: state.search_query().map(str::to_lowercase),
        }
    }

    // Cheapest checks first; the text search allocates, so it runs last.
    fn matches(&self, entry: &FundEntry) -> bool {
        self.matches_category(entry)
            && self.matches_stage(entry)
            && self.matches_size(entry)
            && self.matches_date(entry)
            && self.matches_columns(entry)
            && self.matches_query(entry)
    }

    fn matches_category(&self, entry: &FundEntry) -> bool {
        self.categories.is_empty() || self.categories.contains(&entry.category)
    }

    fn matches_stage(&self, entry: &FundEntry) -> bool {
        self.stages.is_empty() || self.stages.contains(&entry.stage)
    }

    fn matches_size(&self, entry: &FundEntry) -> bool {
        match self.bucket {
            None => true,
            Some(bucket) => entry.amount.is_some_and(|amount| bucket.contains(amount)),
        }
    }

    fn matches_date(&self, entry: &FundEntry) -> bool {
        let Some((from, to)) = self.date_range else {
            return true;
        };
        // An entry without a date can't satisfy a bounded range.
        let Some(date) = entry.announcement_date else {
            return false;
        };
        from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
    }

    fn matches_columns(&self, entry: &FundEntry) -> bool {
        self.columns.iter().all(|(column, accepted)| {
            entry
                .column_value(column)
                .is_some_and(|value| accepted.contains(&value))
        })
    }

    fn matches_query(&self, entry: &FundEntry) -> bool {
        match &self.query {
            None => true,
            Some(q) => entry
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(q.as_str())),
        }
    }
}

/// Entries satisfying every active constraint in `state`, in input order.
pub fn filter_entries<'e>(
    entries: &'e [FundEntry],
    state: &FilterState,
    buckets: &AmountBuckets,
) -> Vec<&'e FundEntry> {
    let predicates = Predicates::new(state, buckets);
    entries.iter().filter(|e| predicates.matches(e)).collect()
}

/// Whether a single entry satisfies every active constraint in `state`.
pub fn entry_matches(entry: &FundEntry, state: &FilterState, buckets: &AmountBuckets) -> bool {
    Predicates::new(state, buckets).matches(entry)
}
