use chrono::NaiveDate;
use iso_currency::Currency;

use crate::presentation::utils::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FundEntryId(pub(crate) u64);

impl FundEntryId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A single fund or grant announcement, as loaded from the entries CSV.
///
/// Entries are immutable once loaded. Fields that failed to parse are kept as
/// `None`, so that the entry simply fails any filter that needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct FundEntry {
    pub id: FundEntryId,
    pub firm: String,
    pub category: String,
    pub stage: String,
    pub city: String,
    pub country: String,
    pub source_name: String,
    pub source_url: Option<String>,
    pub amount: Option<f64>,
    pub currency: Currency,
    pub announcement_date: Option<NaiveDate>,
}

impl FundEntry {
    /// Value of the given column as displayed in the table (and exported), or
    /// `None` for unknown columns and for optional fields that are missing.
    pub fn column_value(&self, column: &str) -> Option<String> {
        match column {
            "firm" => Some(self.firm.clone()),
            "category" => Some(self.category.clone()),
            "stage" => Some(self.stage.clone()),
            "city" => Some(self.city.clone()),
            "country" => Some(self.country.clone()),
            "source_name" => Some(self.source_name.clone()),
            "source_url" => self.source_url.clone(),
            "amount" => self.amount.map(|a| format_amount(a, self.currency)),
            "announcement_date" => self
                .announcement_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            _ => None,
        }
    }

    /// Fields matched by the free-text search.
    pub(crate) fn searchable_fields(&self) -> [&str; 4] {
        [&self.firm, &self.category, &self.city, &self.country]
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::FundEntry;

    #[test]
    fn column_value_known_and_unknown() {
        let e = dated(1, "2024-02-15");
        assert_eq!(e.column_value("firm").as_deref(), Some("Firm 1"));
        assert_eq!(e.column_value("source_name").as_deref(), Some("Press"));
        assert_eq!(
            e.column_value("announcement_date").as_deref(),
            Some("2024-02-15")
        );
        assert_eq!(e.column_value("investors"), None);
    }

    #[test]
    fn column_value_undated() {
        assert_eq!(entry(1).column_value("announcement_date"), None);
    }

    #[test]
    fn column_value_amount_and_source_url() {
        let e = FundEntry {
            amount: Some(750_000.0),
            source_url: Some("https://example.com/a".into()),
            ..entry(1)
        };
        assert_eq!(e.column_value("amount").as_deref(), Some("750,000.00 USD"));
        assert_eq!(
            e.column_value("source_url").as_deref(),
            Some("https://example.com/a")
        );
        assert_eq!(entry(2).column_value("amount"), None);
        assert_eq!(entry(2).column_value("source_url"), None);
    }
}
