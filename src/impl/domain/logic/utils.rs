use chrono::{Datelike, Duration, NaiveDate};
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar quarter (1-4) of the given date.
pub(crate) fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() + 2) / 3
}

/// First and last day of the given quarter, or `None` if either falls outside
/// the supported calendar.
pub(crate) fn quarter_bounds(year: i32, quarter: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first_month = (quarter - 1) * 3 + 1;
    let start = NaiveDate::from_ymd_opt(year, first_month, 1)?;

    // Last day is the day before the first day of the next quarter.
    let (next_year, next_month) = if quarter == 4 {
        (year + 1, 1)
    } else {
        (year, first_month + 3)
    };
    let next_start = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((start, next_start - Duration::days(1)))
}

/// Parses a user-entered date bound. Blank input means unbounded.
pub(crate) fn parse_date_bound(s: &str) -> Result<Option<NaiveDate>, ServerError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|e| InvalidIsoDate::with_debug(s, &e))
}
