use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Timestamps are accepted, but only their date part is kept.
        let date_part = match s.split_once('T') {
            Some((date, _)) => date,
            None => s,
        };
        let d = NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
