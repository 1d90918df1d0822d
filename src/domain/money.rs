use std::fmt;

use num_format::{Locale, ToFormattedString};

/// Money is represented as integer cents to avoid floating-point precision issues.
/// For USD, 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Display locale. Fixed: amounts are always rendered en-US style.
pub const LOCALE: Locale = Locale::en;

/// Symbol placed in front of every formatted amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Largest amount a single entry may carry: $1,000,000,000,000.00.
pub const MAX_AMOUNT_CENTS: Cents = 100_000_000_000_000;

/// Format a value expressed in hundredths with grouped integer digits.
/// Example: 123456 -> "1,234.56"
fn format_hundredths(value: u128) -> String {
    format!(
        "{}.{:02}",
        (value / 100).to_formatted_string(&LOCALE),
        value % 100
    )
}

/// Format cents as a currency string.
/// Example: 100000 -> "$1,000.00", -40000 -> "-$400.00"
pub fn format_currency(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        format_hundredths(u128::from(cents.unsigned_abs()))
    )
}

/// Format a ratio as a percentage with two fraction digits.
/// Example: 0.4 -> "40.00%". NaN and infinities render as "0.00%".
///
/// Any ratio of two `Cents` totals fits in `u128` hundredths of a percent.
pub fn format_percentage(ratio: f64) -> String {
    let ratio = if ratio.is_finite() { ratio } else { 0.0 };
    let hundredths = (ratio.abs() * 10_000.0).round() as u128;
    let sign = if ratio < 0.0 && hundredths > 0 { "-" } else { "" };
    format!("{}{}%", sign, format_hundredths(hundredths))
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((units, decimal)) => (units, decimal),
        None => (digits, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.chars().all(|c| c.is_ascii_digit())
        || !decimal_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::OutOfRange)?
    };

    // Pad or truncate the decimal part to 2 digits
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => decimal_str.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::OutOfRange)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
