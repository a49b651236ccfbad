/// Key reserved for "no amount constraint".
pub const ALL_AMOUNTS_KEY: &str = "all";

/// A named amount range. `min` is inclusive, `max` exclusive, and `None` on
/// either side means unbounded.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct AmountBucket {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl AmountBucket {
    pub fn contains(&self, amount: f64) -> bool {
        self.min.map_or(true, |min| amount >= min) && self.max.map_or(true, |max| amount < max)
    }
}

/// Ordered amount-bucket table, looked up by key.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountBuckets(pub(crate) Vec<AmountBucket>);

impl AmountBuckets {
    pub fn get(&self, key: &str) -> Option<&AmountBucket> {
        self.0.iter().find(|b| b.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AmountBucket> {
        self.0.iter()
    }

    /// Display label of the bucket, falling back to the raw key.
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(|b| b.label.as_str()).unwrap_or(key)
    }
}

impl Default for AmountBuckets {
    fn default() -> Self {
        const M: f64 = 1_000_000.0;
        let bucket = |key: &str, label: &str, min: Option<f64>, max: Option<f64>| AmountBucket {
            key: key.to_string(),
            label: label.to_string(),
            min,
            max,
        };
        AmountBuckets(vec![
            bucket("lt1m", "< $1M", None, Some(M)),
            bucket("1m-5m", "$1M–$5M", Some(M), Some(5.0 * M)),
            bucket("5m-25m", "$5M–$25M", Some(5.0 * M), Some(25.0 * M)),
            bucket("25m-100m", "$25M–$100M", Some(25.0 * M), Some(100.0 * M)),
            bucket("100m+", "$100M+", Some(100.0 * M), None),
        ])
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "lt1m")]
    #[case(999_999.0, "lt1m")]
    #[case(1_000_000.0, "1m-5m")]
    #[case(4_999_999.99, "1m-5m")]
    #[case(25_000_000.0, "25m-100m")]
    #[case(100_000_000.0, "100m+")]
    #[case(7_500_000_000.0, "100m+")]
    fn default_buckets_partition_amounts(#[case] amount: f64, #[case] expected: &str) {
        let buckets = AmountBuckets::default();
        let matching: Vec<&str> = buckets
            .iter()
            .filter(|b| b.contains(amount))
            .map(|b| b.key.as_str())
            .collect();
        assert_eq!(matching, vec![expected]);
    }

    #[test]
    fn label_falls_back_to_key() {
        let buckets = AmountBuckets::default();
        assert_eq!(buckets.label_for("1m-5m"), "$1M–$5M");
        assert_eq!(buckets.label_for("huge"), "huge");
    }
}
