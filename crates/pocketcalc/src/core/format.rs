//! Number formatting and parsing for the display and history pane
//!
//! Both renderings start from the shortest decimal digits that round-trip
//! to the same `f64`, so binary noise never reaches the screen.

use crate::core::{ERROR_MARKER, FRACTION_DIGITS, INTEGER_EPSILON};

/// Operands at or above this magnitude are logged in exponent form
const PLAIN_UPPER: f64 = 1e7;

/// Operands below this magnitude are logged in exponent form
const PLAIN_LOWER: f64 = 1e-3;

/// Formats a computed value for the display.
///
/// Values within [`INTEGER_EPSILON`] of an integer are shown as that integer.
/// Everything else is rounded half-up to [`FRACTION_DIGITS`] fractional
/// digits, then trailing zeros and a dangling decimal point are trimmed.
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_EPSILON {
        // -0 would otherwise render with a sign
        if rounded == 0.0 {
            return "0".to_string();
        }
        return to_fixed(rounded, 0);
    }

    let fixed = to_fixed(value, FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Parses display text as an operand. Never fails: the error marker, an
/// empty string, a lone decimal point and unparseable text all yield `0.0`.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    match text {
        ERROR_MARKER | "" | "." => 0.0,
        other => other.parse().unwrap_or(0.0),
    }
}

/// Renders an operand the way history lines show it.
///
/// Magnitudes in `[1e-3, 1e7)` print in plain form with at least one
/// fractional digit (`2.0`, `0.25`). Everything else prints as a mantissa
/// and exponent (`1.2345678E7`, `1.0E-4`). Non-finite values print as
/// `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn format_operand(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }

    let magnitude = value.abs();
    if magnitude == 0.0 {
        return format!("{sign}0.0");
    }

    let (digits, point) = shortest_digits(magnitude);
    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();

    if (PLAIN_LOWER..PLAIN_UPPER).contains(&magnitude) {
        let body = if point <= 0 {
            format!("0.{}{text}", "0".repeat(point.unsigned_abs() as usize))
        } else {
            let point = point as usize;
            if point >= text.len() {
                format!("{text}{}.0", "0".repeat(point - text.len()))
            } else {
                format!("{}.{}", &text[..point], &text[point..])
            }
        };
        return format!("{sign}{body}");
    }

    let (head, tail) = text.split_at(1);
    let tail = if tail.is_empty() { "0" } else { tail };
    format!("{sign}{head}.{tail}E{}", point - 1)
}

/// Shortest round-trip digits of `magnitude` and the decimal point position.
///
/// The value is `0.d1d2d3... * 10^point`.
fn shortest_digits(magnitude: f64) -> (Vec<u8>, i32) {
    let sci = format!("{magnitude:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent + 1)
}

/// Fixed-point rendering of the shortest digits, rounded half-up
fn to_fixed(value: f64, fraction_digits: usize) -> String {
    let (mut digits, mut point) = shortest_digits(value.abs());

    // at least one integer digit
    if point < 1 {
        let mut padded = vec![0; (1 - point) as usize];
        padded.append(&mut digits);
        digits = padded;
        point = 1;
    }
    let mut point = point as usize;

    let keep = point + fraction_digits;
    if digits.len() < keep {
        digits.resize(keep, 0);
    }
    let round_up = digits.get(keep).is_some_and(|&d| d >= 5);
    digits.truncate(keep);

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            point += 1;
        }
    }

    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let integer = render(&digits[..point]);
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if fraction_digits == 0 {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{}", render(&digits[point..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== format_result =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_result(20.0), "20");
        assert_eq!(format_result(-7.0), "-7");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-1e-12), "0");
    }

    #[test]
    fn test_format_large_integer_uses_shortest_digits() {
        assert_eq!(format_result(1e23), "100000000000000000000000");
        assert_eq!(
            format_result(99_999_999_999.0 * 999_999_999_999.0),
            "99999999998900000000000"
        );
        assert_eq!(format_result(-2e19), "-20000000000000000000");
    }

    #[test]
    fn test_format_exact_integers_below_2_pow_53() {
        assert_eq!(format_result(9_007_199_254_740_991.0), "9007199254740991");
        assert_eq!(format_result(123_456_789.0), "123456789");
    }

    #[test]
    fn test_format_near_integer_snaps() {
        assert_eq!(format_result(4.99999999999), "5");
        assert_eq!(format_result(5.00000000001), "5");
    }

    #[test]
    fn test_format_just_outside_snap_window() {
        assert_eq!(format_result(5.0000000002), "5.0000000002");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_result(0.25), "0.25");
        assert_eq!(format_result(-1.5), "-1.5");
    }

    #[test]
    fn test_format_rounds_to_ten_digits() {
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_result(0.123_456_789_06), "0.1234567891");
    }

    #[test]
    fn test_format_rounding_carries() {
        assert_eq!(format_result(0.129_999_999_996), "0.13");
        assert_eq!(format_result(9.999_999_999_96), "10");
    }

    #[test]
    fn test_to_fixed_carry_adds_digit() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(-0.05, 1), "-0.1");
        assert_eq!(to_fixed(0.04, 1), "0.0");
    }

    #[test]
    fn test_format_fraction_without_binary_noise() {
        assert_eq!(format_result(123_456_789.123_456_789), "123456789.12345679");
    }

    #[test]
    fn test_format_small_fraction() {
        assert_eq!(format_result(0.000_000_000_15), "0.0000000002");
        assert_eq!(format_result(-0.0001), "-0.0001");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_result(f64::NAN), ERROR_MARKER);
        assert_eq!(format_result(f64::INFINITY), ERROR_MARKER);
        assert_eq!(format_result(f64::NEG_INFINITY), ERROR_MARKER);
    }

    // ===== parse_display =====

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_display("42"), 42.0);
        assert_eq!(parse_display("0.25"), 0.25);
        assert_eq!(parse_display("-2.5"), -2.5);
    }

    #[test]
    fn test_parse_trailing_decimal_point() {
        assert_eq!(parse_display("7."), 7.0);
        assert_eq!(parse_display("0."), 0.0);
    }

    #[test]
    fn test_parse_fallbacks() {
        assert_eq!(parse_display(ERROR_MARKER), 0.0);
        assert_eq!(parse_display(""), 0.0);
        assert_eq!(parse_display("."), 0.0);
        assert_eq!(parse_display("1.2.3"), 0.0);
        assert_eq!(parse_display("abc"), 0.0);
    }

    #[test]
    fn test_parse_very_long_digit_string() {
        let text = "9".repeat(400);
        assert!(parse_display(&text).is_infinite());
    }

    #[test]
    fn test_parse_large_result_roundtrips() {
        let shown = format_result(99_999_999_999.0 * 999_999_999_999.0);
        assert_eq!(parse_display(&shown), 99_999_999_999.0 * 999_999_999_999.0);
    }

    // ===== format_operand =====

    #[test]
    fn test_format_operand_plain_range() {
        assert_eq!(format_operand(2.0), "2.0");
        assert_eq!(format_operand(5.0), "5.0");
        assert_eq!(format_operand(0.25), "0.25");
        assert_eq!(format_operand(-3.5), "-3.5");
        assert_eq!(format_operand(0.001), "0.001");
        assert_eq!(format_operand(1234.5), "1234.5");
        assert_eq!(format_operand(9_999_999.0), "9999999.0");
    }

    #[test]
    fn test_format_operand_large_uses_exponent() {
        assert_eq!(format_operand(12_345_678.0), "1.2345678E7");
        assert_eq!(format_operand(1e7), "1.0E7");
        assert_eq!(format_operand(1e16), "1.0E16");
        assert_eq!(format_operand(-2.5e20), "-2.5E20");
    }

    #[test]
    fn test_format_operand_small_uses_exponent() {
        assert_eq!(format_operand(0.0001), "1.0E-4");
        assert_eq!(format_operand(1e-5), "1.0E-5");
        assert_eq!(format_operand(0.000_123_4), "1.234E-4");
    }

    #[test]
    fn test_format_operand_zero() {
        assert_eq!(format_operand(0.0), "0.0");
        assert_eq!(format_operand(-0.0), "-0.0");
    }

    #[test]
    fn test_format_operand_non_finite() {
        assert_eq!(format_operand(f64::INFINITY), "Infinity");
        assert_eq!(format_operand(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_operand(f64::NAN), "NaN");
    }

    // ===== shortest digits =====

    #[test]
    fn test_shortest_digits() {
        assert_eq!(shortest_digits(1e23), (vec![1], 24));
        assert_eq!(shortest_digits(0.25), (vec![2, 5], 0));
        assert_eq!(shortest_digits(0.0), (vec![0], 1));
    }
}
