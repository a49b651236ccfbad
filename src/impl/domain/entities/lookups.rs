use super::{amount_bucket::AmountBuckets, column_labels::ColumnLabels};

/// Static tables used to label filters and columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub amount_buckets: AmountBuckets,
    pub column_labels: ColumnLabels,
}
