//! Civil station notation.
//!
//! Stations are written as full stations of [`STATION_LENGTH`] units plus
//! the remainder: `1250.5` is `12+50.50`.

use crate::precision::STATION_LENGTH;
use crate::{FeaturelineError, Result};

/// Largest number of decimals [`format_station`] will honor.
const MAX_DECIMALS: usize = 6;

/// Formats a station value in `SS+RR.rr` notation with `decimals` digits
/// after the point (capped at 6).
///
/// Negative stations carry a leading `-`. Non-finite values and values too
/// large for the notation are written as plain numbers.
pub fn format_station(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = 10f64.powi(decimals as i32);
    let scaled = (value.abs() * scale).round();
    if !value.is_finite() || scaled >= u64::MAX as f64 {
        return format!("{:.*}", decimals, value);
    }

    // Integer arithmetic keeps a rounded remainder from reaching 100.00
    let units = scaled as u64;
    let per_station = (STATION_LENGTH * scale) as u64;
    let whole = units / per_station;
    let remainder = (units % per_station) as f64 / scale;

    let sign = if value < 0.0 && units > 0 { "-" } else { "" };
    let width = if decimals == 0 { 2 } else { 3 + decimals };
    format!("{}{}+{:0width$.prec$}", sign, whole, remainder, width = width, prec = decimals)
}

/// Parses `SS+RR.rr` notation (optionally signed) or a plain number.
pub fn parse_station(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || FeaturelineError::InvalidStation(text.to_string());

    let Some(plus) = trimmed.rfind('+').filter(|&i| i > 0) else {
        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        return if value.is_finite() { Ok(value) } else { Err(invalid()) };
    };

    let (head, tail) = (&trimmed[..plus], &trimmed[plus + 1..]);
    let (negative, digits) = match head.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, head),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }

    let whole: f64 = digits.parse().map_err(|_| invalid())?;
    let remainder: f64 = tail.parse().map_err(|_| invalid())?;
    if remainder >= STATION_LENGTH {
        return Err(invalid());
    }

    let value = whole * STATION_LENGTH + remainder;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_station() {
        assert_eq!(format_station(1250.5, 2), "12+50.50");
        assert_eq!(format_station(12.5, 2), "0+12.50");
        assert_eq!(format_station(0.0, 2), "0+00.00");
        assert_eq!(format_station(1250.4, 0), "12+50");
        assert_eq!(format_station(305.0, 3), "3+05.000");
    }

    #[test]
    fn test_format_station_rounding_carries() {
        assert_eq!(format_station(99.999, 2), "1+00.00");
        assert_eq!(format_station(1299.996, 2), "13+00.00");
    }

    #[test]
    fn test_format_negative_station() {
        assert_eq!(format_station(-12.5, 2), "-0+12.50");
        assert_eq!(format_station(-0.001, 2), "0+00.00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_station(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_parse_station() {
        assert!((parse_station("12+50.50").unwrap() - 1250.5).abs() < 1e-10);
        assert!((parse_station(" 0+12.5 ").unwrap() - 12.5).abs() < 1e-10);
        assert!((parse_station("-0+12.5").unwrap() + 12.5).abs() < 1e-10);
        assert!((parse_station("1250.5").unwrap() - 1250.5).abs() < 1e-10);
        assert!((parse_station("+1250.5").unwrap() - 1250.5).abs() < 1e-10);
    }

    #[test]
    fn test_parse_invalid_station() {
        for text in ["", "abc", "12+", "1a+50", "12+150.0", "12+-5", "inf"] {
            assert!(
                matches!(parse_station(text), Err(FeaturelineError::InvalidStation(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_formatted_station() {
        for value in [0.0, 12.5, 1250.5, 98765.25] {
            let text = format_station(value, 2);
            assert!((parse_station(&text).unwrap() - value).abs() < 1e-9, "{text}");
        }
    }
}
