//! Numeric parsing and range checks for range rules

use serde::{Deserialize, Serialize};

/// How a range field's raw text is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericType {
    Integer,
    Float,
}

/// Parses a trimmed value as a whole number
///
/// Fractions such as `"65.5"` are rejected rather than truncated.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

/// Parses a trimmed value as a finite decimal number
///
/// `"inf"` and `"NaN"` parse as `f64` in Rust but are not numbers a user
/// can meaningfully enter, so they fail here.
pub fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Checks value lies in the closed interval `[min, max]`
pub fn within_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Parses `value` per `numeric` and checks it against `[min, max]`
pub fn check_range(value: &str, numeric: NumericType, min: f64, max: f64) -> bool {
    match numeric {
        NumericType::Integer => parse_integer(value)
            // i64 -> f64 is exact for every value a range rule can accept
            .map(|v| within_range(v as f64, min, max))
            .unwrap_or(false),
        NumericType::Float => parse_float(value)
            .map(|v| within_range(v, min, max))
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(within_range(5, 1, 10));
        assert!(within_range(1, 1, 10));
        assert!(within_range(10, 1, 10));
        assert!(!within_range(0, 1, 10));
        assert!(!within_range(11, 1, 10));

        assert!(within_range(0.0, 0.0, 10.0));
        assert!(!within_range(10.1, 0.0, 10.0));
    }

    #[test]
    fn test_integer_parsing_is_strict() {
        assert_eq!(parse_integer("120"), Some(120));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("65.5"), None);
        assert_eq!(parse_integer("65abc"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn test_float_parsing_rejects_non_finite() {
        assert_eq!(parse_float("3.5"), Some(3.5));
        assert_eq!(parse_float("2"), Some(2.0));
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("1,5"), None);
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("1", NumericType::Integer, 1.0, 120.0));
        assert!(!check_range("0", NumericType::Integer, 1.0, 120.0));
        assert!(!check_range("1.0", NumericType::Integer, 1.0, 120.0));
        assert!(check_range("10", NumericType::Float, 0.0, 10.0));
        assert!(!check_range("10.01", NumericType::Float, 0.0, 10.0));
    }
}
