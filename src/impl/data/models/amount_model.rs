use std::{str::FromStr, sync::OnceLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::InvalidAmount;

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Optional currency prefix, number with optional thousands separators,
        // optional magnitude suffix.
        Regex::new(r"^(?i)(?:[A-Z]{3}\s*)?[$€£]?\s*(\d+(?:\.\d+)?)\s*([KMB])?$")
            .expect("hardcoded regex should be valid")
    })
}

/// Announced amount, as written in the source data: `1,500,000`, `$1.5M`,
/// `250K`, `EUR 2B`, or accounting-style negatives such as `(1,000)`.
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let inner = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let caps = amount_pattern()
            .captures(inner)
            .ok_or_else(|| InvalidAmount::new(s))?;
        let number = caps[1]
            .parse::<f64>()
            .map_err(|e| InvalidAmount::with_debug(s, &e))?;
        let multiplier = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()) {
            Some(suffix) if suffix == "K" => 1e3,
            Some(suffix) if suffix == "M" => 1e6,
            Some(suffix) if suffix == "B" => 1e9,
            _ => 1.0,
        };
        let amount = number * multiplier;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
