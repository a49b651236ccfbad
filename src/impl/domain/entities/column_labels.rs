use indexmap::IndexMap;

/// Table columns in display order, with their default display names.
pub const DEFAULT_COLUMNS: [(&str, &str); 8] = [
    ("firm", "Firm"),
    ("category", "Category"),
    ("stage", "Stage"),
    ("amount", "Amount"),
    ("announcement_date", "Announced"),
    ("city", "City"),
    ("country", "Country"),
    ("source_name", "Source"),
];

/// Column key to display name lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLabels(pub(crate) IndexMap<String, String>);

impl ColumnLabels {
    /// Display name of the column, falling back to the raw key.
    pub fn display_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.0.get(column).map(String::as_str).unwrap_or(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for ColumnLabels {
    fn default() -> Self {
        ColumnLabels(
            DEFAULT_COLUMNS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
