use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::FundWatchRecords;

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn from_string(
        &self,
        entries_csv: &str,
        lookups_ron: Option<&str>,
    ) -> Result<FundWatchRecords, ServerError>;

    async fn from_file<P>(
        &self,
        entries_csv: P,
        lookups_ron: Option<P>,
    ) -> Result<FundWatchRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
