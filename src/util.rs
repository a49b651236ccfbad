use fractic_server_error::ServerError;

use crate::{
    domain::usecases::load_usecase::{LoadUsecase as _, LoadUsecaseImpl},
    entities::{FilterState, FundWatch},
    presentation::{csv_exporter::CsvExporter, table_settings::TableSettings},
};

pub type Csv = String;

/// Entry point for loading fund-watch data and exporting filtered views of it.
pub struct FundWatchUtil {
    load_usecase: LoadUsecaseImpl,
    exporter: CsvExporter,
}

impl FundWatchUtil {
    pub fn new() -> Self {
        Self {
            load_usecase: LoadUsecaseImpl::new(),
            exporter: CsvExporter::new(),
        }
    }

    /// Loads entries from CSV text, with optional RON lookup tables
    /// (defaults are used when `None`).
    pub fn from_string(
        &self,
        entries_csv: &str,
        lookups_ron: Option<&str>,
    ) -> Result<FundWatch, ServerError> {
        self.load_usecase.from_string(entries_csv, lookups_ron)
    }

    pub async fn from_file<T>(
        &self,
        entries_csv: T,
        lookups_ron: Option<T>,
    ) -> Result<FundWatch, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.load_usecase.from_file(entries_csv, lookups_ron).await
    }

    /// CSV of the entries currently matching `state`, restricted to the
    /// visible columns.
    pub fn export_csv(
        &self,
        fund_watch: &FundWatch,
        state: &FilterState,
        settings: &TableSettings,
    ) -> Result<Csv, ServerError> {
        let entries = fund_watch.filter(state);
        tracing::debug!(rows = entries.len(), "exporting fund-watch CSV");
        self.exporter
            .export(&entries, settings, &fund_watch.lookups().column_labels)
    }
}

impl Default for FundWatchUtil {
    fn default() -> Self {
        Self::new()
    }
}
