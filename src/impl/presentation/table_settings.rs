use std::collections::BTreeSet;

use crate::entities::ColumnLabels;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

/// Table display preferences. Columns are visible unless hidden, and always
/// shown in the order of the column-label table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub hidden_columns: BTreeSet<String>,
    pub density: Density,
}

impl TableSettings {
    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden_columns.contains(column)
    }

    pub fn toggle_column(&mut self, column: &str) {
        if !self.hidden_columns.remove(column) {
            self.hidden_columns.insert(column.to_string());
        }
    }

    pub fn toggle_density(&mut self) {
        self.density = match self.density {
            Density::Comfortable => Density::Compact,
            Density::Compact => Density::Comfortable,
        };
    }

    pub fn visible_columns<'a>(&'a self, labels: &'a ColumnLabels) -> Vec<&'a str> {
        labels.columns().filter(|c| self.is_visible(c)).collect()
    }
}
