use std::{collections::HashMap, str::FromStr as _};

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{FundEntry, FundEntryId},
    errors::{InvalidCsv, InvalidIsoCurrencyCode, MissingCsvColumn, ReadError},
};

const REQUIRED_COLUMNS: [&str; 8] = [
    "firm",
    "category",
    "stage",
    "amount",
    "announcement_date",
    "city",
    "country",
    "source_name",
];

#[async_trait]
pub(crate) trait EntriesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<FundEntry>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<FundEntry>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct EntriesCsvDatasourceImpl;

impl EntriesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

/// Header name to column position.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &csv::StringRecord) -> Result<Self, ServerError> {
        let columns: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_ascii_lowercase(), i))
            .collect();
        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !columns.contains_key(**c)) {
            return Err(MissingCsvColumn::new(missing));
        }
        Ok(Columns(columns))
    }

    fn get<'r>(&self, r: &'r csv::StringRecord, column: &str) -> &'r str {
        self.0
            .get(column)
            .and_then(|i| r.get(*i))
            .map(str::trim)
            .unwrap_or("")
    }

    fn get_opt<'r>(&self, r: &'r csv::StringRecord, column: &str) -> Option<&'r str> {
        Some(self.get(r, column)).filter(|s| !s.is_empty())
    }
}

#[async_trait]
impl EntriesCsvDatasource for EntriesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<FundEntry>, ServerError> {
        let mut reader = csv::Reader::from_reader(s.as_bytes());
        let columns = Columns::new(reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?)?;
        reader
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = columns.get_opt(&r, "id");
                    let raw_amount = columns.get_opt(&r, "amount");
                    let raw_currency = columns.get_opt(&r, "currency");
                    let raw_date = columns.get_opt(&r, "announcement_date");

                    // Parse. Malformed amounts and dates only affect the
                    // filters that need them, so they're kept as missing.
                    let id = raw_id
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(i as u64);
                    let amount: Option<f64> = raw_amount.and_then(|s| {
                        AmountModel::from_str(s)
                            .map(Into::into)
                            .inspect_err(|_| {
                                tracing::warn!(row = i, amount = s, "ignoring malformed amount")
                            })
                            .ok()
                    });
                    let announcement_date: Option<NaiveDate> = raw_date.and_then(|s| {
                        ISODateModel::from_str(s)
                            .map(Into::into)
                            .inspect_err(|_| {
                                tracing::warn!(row = i, date = s, "ignoring malformed date")
                            })
                            .ok()
                    });
                    let currency = match raw_currency {
                        None => Currency::USD,
                        Some(code) => Currency::from_code(&code.to_ascii_uppercase())
                            .ok_or_else(|| InvalidIsoCurrencyCode::new(code))?,
                    };

                    // Build.
                    Ok(FundEntry {
                        id: FundEntryId(id),
                        firm: columns.get(&r, "firm").to_string(),
                        category: columns.get(&r, "category").to_string(),
                        stage: columns.get(&r, "stage").to_string(),
                        city: columns.get(&r, "city").to_string(),
                        country: columns.get(&r, "country").to_string(),
                        source_name: columns.get(&r, "source_name").to_string(),
                        source_url: columns.get_opt(&r, "source_url").map(String::from),
                        amount,
                        currency,
                        announcement_date,
                    })
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<FundEntry>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
