use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            entries_csv_datasource::EntriesCsvDatasourceImpl,
            lookups_ron_datasource::LookupsRonDatasourceImpl,
        },
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{FundWatch, FundWatchRecords},
};

#[async_trait]
pub trait LoadUsecase: Send + Sync {
    fn from_string(
        &self,
        entries_csv: &str,
        lookups_ron: Option<&str>,
    ) -> Result<FundWatch, ServerError>;

    async fn from_file<P>(
        &self,
        entries_csv: P,
        lookups_ron: Option<P>,
    ) -> Result<FundWatch, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadUsecaseImpl<
    R1 = RecordsRepositoryImpl<EntriesCsvDatasourceImpl, LookupsRonDatasourceImpl>, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
}

fn build(records: FundWatchRecords) -> FundWatch {
    let fund_watch = FundWatch::new(records.entries, records.lookups);
    tracing::debug!(
        entries = fund_watch.entries().len(),
        undated = fund_watch
            .entries()
            .iter()
            .filter(|e| e.announcement_date.is_none())
            .count(),
        quarters = fund_watch.quarters().len(),
        "loaded fund-watch entries"
    );
    fund_watch
}

#[async_trait]
impl<R1> LoadUsecase for LoadUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    fn from_string(
        &self,
        entries_csv: &str,
        lookups_ron: Option<&str>,
    ) -> Result<FundWatch, ServerError> {
        let records = self
            .records_repository
            .from_string(entries_csv, lookups_ron)?;
        Ok(build(records))
    }

    async fn from_file<P>(
        &self,
        entries_csv: P,
        lookups_ron: Option<P>,
    ) -> Result<FundWatch, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self
            .records_repository
            .from_file(entries_csv, lookups_ron)
            .await?;
        Ok(build(records))
    }
}

impl LoadUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}
