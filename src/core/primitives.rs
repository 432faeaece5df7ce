use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a trimmed numeric cell, rejecting empty input and non-finite values.
///
/// `"NaN"` and `"inf"` parse as `f64` in Rust but are never valid data here.
#[must_use]
pub fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses a non-negative count cell such as a bedroom count.
///
/// Fractional values truncate toward zero, so `"2.0"` and `"2.5"` both count
/// as 2. Negative or out-of-range values are rejected.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_finite(raw)?.trunc();
    (0.0..=f64::from(u32::MAX))
        .contains(&value)
        .then_some(value as u32)
}

/// Formats a raw amount as dollars with thousands separators and two decimals.
///
/// Returns `None` when the input is not a decimal number.
#[must_use]
pub fn format_currency(raw: &str) -> Option<String> {
    let value = Decimal::from_str(raw.trim()).ok()?;
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    Some(format!("{sign}${grouped}.{fraction}"))
}

#[cfg(test)]
mod tests {
    use super::{format_currency, parse_count, parse_finite};

    #[test]
    fn parse_finite_trims_and_rejects_non_finite() {
        assert_eq!(parse_finite(" 1004 "), Some(1004.0));
        assert_eq!(parse_finite("-123.06504"), Some(-123.06504));
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("   "), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("invalid_latitude"), None);
    }

    #[test]
    fn parse_count_truncates_fractions_and_rejects_negatives() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" 0 "), Some(0));
        assert_eq!(parse_count("2.0"), Some(2));
        assert_eq!(parse_count("2.5"), Some(2));
        assert_eq!(parse_count("-0.5"), Some(0));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("two"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn currency_groups_thousands_and_pads_cents() {
        assert_eq!(format_currency("50000").as_deref(), Some("$50,000.00"));
        assert_eq!(format_currency("5000000").as_deref(), Some("$5,000,000.00"));
        assert_eq!(format_currency("999.5").as_deref(), Some("$999.50"));
        assert_eq!(format_currency("0").as_deref(), Some("$0.00"));
        assert_eq!(format_currency("-1234.567").as_deref(), Some("-$1,234.57"));
        assert_eq!(format_currency("abc"), None);
    }
}
