use std::collections::HashSet;

use fractic_server_error::ServerError;
use indexmap::IndexMap;

use crate::{
    entities::{AmountBucket, AmountBuckets, ColumnLabels, Lookups, ALL_AMOUNTS_KEY},
    errors::{DuplicateAmountBucket, InvalidAmountBucketRange, ReservedAmountBucketKey},
};

/// Lookup tables as written in RON. Omitted tables fall back to the
/// defaults; column labels given here extend (and override) the defaults.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct LookupsModel {
    pub amount_buckets: Option<Vec<AmountBucket>>,
    pub column_labels: IndexMap<String, String>,
}

impl LookupsModel {
    pub(crate) fn validate(self) -> Result<Lookups, ServerError> {
        let amount_buckets = match self.amount_buckets {
            None => AmountBuckets::default(),
            Some(buckets) => {
                let mut keys = HashSet::new();
                for b in &buckets {
                    if b.key == ALL_AMOUNTS_KEY || b.key.is_empty() {
                        return Err(ReservedAmountBucketKey::new(&b.key));
                    }
                    if !keys.insert(b.key.as_str()) {
                        return Err(DuplicateAmountBucket::new(&b.key));
                    }
                    if let (Some(min), Some(max)) = (b.min, b.max) {
                        if min >= max {
                            return Err(InvalidAmountBucketRange::new(&b.key, min, max));
                        }
                    }
                }
                AmountBuckets(buckets)
            }
        };
        let mut column_labels = ColumnLabels::default();
        column_labels.0.extend(self.column_labels);
        Ok(Lookups {
            amount_buckets,
            column_labels,
        })
    }
}
