use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        entries_csv_datasource::{EntriesCsvDatasource, EntriesCsvDatasourceImpl},
        lookups_ron_datasource::{LookupsRonDatasource, LookupsRonDatasourceImpl},
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{FundWatchRecords, Lookups},
};

pub(crate) struct RecordsRepositoryImpl<DS1, DS2>
where
    DS1: EntriesCsvDatasource,
    DS2: LookupsRonDatasource,
{
    entries_datasource: DS1,
    lookups_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> RecordsRepository for RecordsRepositoryImpl<DS1, DS2>
where
    DS1: EntriesCsvDatasource,
    DS2: LookupsRonDatasource,
{
    fn from_string(
        &self,
        entries_csv: &str,
        lookups_ron: Option<&str>,
    ) -> Result<FundWatchRecords, ServerError> {
        Ok(FundWatchRecords {
            entries: self.entries_datasource.from_string(entries_csv)?,
            lookups: match lookups_ron {
                Some(s) => self.lookups_datasource.from_string(s)?,
                None => Lookups::default(),
            },
        })
    }

    async fn from_file<P>(
        &self,
        entries_csv: P,
        lookups_ron: Option<P>,
    ) -> Result<FundWatchRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(FundWatchRecords {
            entries: self.entries_datasource.from_file(entries_csv).await?,
            lookups: match lookups_ron {
                Some(p) => self.lookups_datasource.from_file(p).await?,
                None => Lookups::default(),
            },
        })
    }
}

impl RecordsRepositoryImpl<EntriesCsvDatasourceImpl, LookupsRonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            entries_datasource: EntriesCsvDatasourceImpl::new(),
            lookups_datasource: LookupsRonDatasourceImpl::new(),
        }
    }
}
