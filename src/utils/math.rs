//! # Game Mathematics
//!
//! Rounding and formatting helpers for question numbers.

/// Rounds a value to a fixed number of decimal places.
///
/// Midpoints round to the nearest even digit, so `0.125` at two places
/// becomes `0.12` and `2.5` at zero places becomes `2`.
///
/// # Examples
///
/// ```
/// use mathdash::round_to_decimals;
///
/// assert_eq!(round_to_decimals(3.14159, 2), 3.14);
/// assert_eq!(round_to_decimals(2.5, 0), 2.0);
/// assert_eq!(round_to_decimals(-7.0, 3), -7.0);
/// ```
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Formats a question number as the shortest decimal text.
///
/// Whole numbers carry no fractional part and negative zero prints as `0`.
///
/// # Examples
///
/// ```
/// use mathdash::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(1.23456, 0), 1.0);
        assert_eq!(round_to_decimals(1.23456, 1), 1.2);
        assert_eq!(round_to_decimals(1.23456, 3), 1.235);
        assert_eq!(round_to_decimals(-1.75, 1), -1.8);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round_to_decimals(0.5, 0), 0.0);
        assert_eq!(round_to_decimals(1.5, 0), 2.0);
        assert_eq!(round_to_decimals(-2.5, 0), -2.0);
    }

    #[test]
    fn test_round_large_precision_keeps_value() {
        assert_eq!(round_to_decimals(1e300, 20), 1e300);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.75), "0.75");
        assert_eq!(format_number(0.0), "0");
    }
}
