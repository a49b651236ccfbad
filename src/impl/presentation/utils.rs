use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format an announced amount with proper thousands separators, the
/// currency's number of decimal places, and the ISO code as suffix (ex.
/// "1,500,000.00 USD", "250,000,000 JPY").
///
/// Always uses the en locale ('.' as decimal mark) so that exports are
/// consistent regardless of the user's locale.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10i64.pow(decimal_places);
    let minor_units = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.code())
    } else {
        format!(
            "{}{}.{:0width$} {}",
            sign,
            integer_part,
            minor_units % scale,
            currency.code(),
            width = decimal_places as usize,
        )
    }
}
