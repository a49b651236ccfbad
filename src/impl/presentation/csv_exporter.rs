use fractic_server_error::ServerError;

use crate::{
    entities::{ColumnLabels, FundEntry},
    errors::CsvExportFailed,
};

use super::table_settings::TableSettings;

/// Writes entries as CSV, one column per visible table column.
pub(crate) struct CsvExporter;

impl CsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn export(
        &self,
        entries: &[&FundEntry],
        settings: &TableSettings,
        labels: &ColumnLabels,
    ) -> Result<String, ServerError> {
        let columns = settings.visible_columns(labels);
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(columns.iter().map(|c| labels.display_name(c)))
            .map_err(|e| CsvExportFailed::with_debug("header", &e))?;
        for entry in entries {
            writer
                .write_record(
                    columns
                        .iter()
                        .map(|c| entry.column_value(c).unwrap_or_default()),
                )
                .map_err(|e| CsvExportFailed::with_debug("row", &e))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CsvExportFailed::with_debug("flush", e.error()))?;
        String::from_utf8(bytes).map_err(|e| CsvExportFailed::with_debug("utf-8", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fund_entry::fixtures::{dated, entry};

    #[test]
    fn exports_visible_columns_with_display_headers() {
        let mut funded = dated(1, "2024-02-15");
        funded.firm = "Acme, Inc.".into();
        funded.amount = Some(2_500_000.0);
        let undated = entry(2);

        let mut settings = TableSettings::default();
        for c in ["stage", "city", "country", "source_name"] {
            settings.toggle_column(c);
        }
        let csv = CsvExporter::new()
            .export(&[&funded, &undated], &settings, &ColumnLabels::default())
            .unwrap();
        assert_eq!(
            csv,
            "Firm,Category,Amount,Announced\n\
             \"Acme, Inc.\",Venture,\"2,500,000.00 USD\",2024-02-15\n\
             Firm 2,Venture,,\n"
        );
    }

    #[test]
    fn exports_header_only_when_nothing_matches() {
        let csv = CsvExporter::new()
            .export(&[], &TableSettings::default(), &ColumnLabels::default())
            .unwrap();
        assert_eq!(
            csv,
            "Firm,Category,Stage,Amount,Announced,City,Country,Source\n"
        );
    }
}
