//! # Number Formatting
//!
//! Conversions between operand strings and `f64`.
//!
//! The display strings follow the familiar "shortest round-trip" style:
//! plain decimals in the everyday range, exponential notation with an
//! explicit exponent sign outside it (`1e+21`, `1.5e-7`). Results are
//! rounded to 12 decimal places first so `0.1 + 0.2` shows as `0.3`.

/// Longest operand the display holds before falling back to exponential notation.
pub const MAX_DISPLAY_LEN: usize = 15;

/// Results are rounded to 12 decimal places.
const ROUNDING_SCALE: f64 = 1e12;

/// Fractional digits used when a result is too long for the display.
pub const EXPONENTIAL_DIGITS: usize = 5;

/// Parse the longest numeric prefix of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Trailing junk is ignored, so in-progress entries
/// like `"5."` or `"1e-7."` read as their numeric prefix. Returns `None`
/// when there are no digits before the exponent.
pub fn parse_operand(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Round to 12 decimal places, halves toward positive infinity.
///
/// Values too large to scale are already far beyond that precision and
/// come back unchanged.
pub fn round_to_precision(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / ROUNDING_SCALE
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Shortest decimal string that reads back as `value`.
///
/// Plain notation for `1e-6 <= |value| < 1e21`, exponential otherwise.
/// Zero of either sign is `"0"`. Callers only pass finite values.
pub fn canonical(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        sign_exponent(format!("{:e}", value))
    }
}

/// Enough fractional digits to spell out any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 800;

/// Exponential notation with a fixed number of fractional digits.
///
/// Ties round away from zero (`1.25` -> `1.3e+0`), so the last digit is
/// rounded on the exact decimal expansion rather than by `format!`, which
/// rounds ties to even.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, value.abs());
    let parsed = exact
        .split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
    let Some((mantissa, mut exponent)) = parsed else {
        return sign_exponent(format!("{:.*e}", fraction_digits, value));
    };

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let keep = fraction_digits + 1;
    let round_up = digits.get(keep).is_some_and(|&d| d >= 5);
    digits.truncate(keep);

    if round_up {
        match digits.iter().rposition(|&d| d != 9) {
            Some(i) => {
                digits[i] += 1;
                digits[i + 1..].fill(0);
            }
            None => {
                // 9.99 -> 10.0: shift into the next power of ten
                digits.fill(0);
                digits[0] = 1;
                exponent += 1;
            }
        }
    }

    let mut text = String::new();
    if value < 0.0 {
        text.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == 1 {
            text.push('.');
        }
        text.push(char::from(b'0' + d));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    text.push_str(&format!("e{}{}", sign, exponent.abs()));
    text
}

/// Canonical form, or exponential when it wouldn't fit the display.
pub fn format_result(value: f64) -> String {
    let text = canonical(value);
    if text.chars().count() > MAX_DISPLAY_LEN {
        to_exponential(value, EXPONENTIAL_DIGITS)
    } else {
        text
    }
}

/// `1e21` -> `1e+21`; negative exponents already carry their sign.
fn sign_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_operand("0"), Some(0.0));
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("-0.5"), Some(-0.5));
        assert_eq!(parse_operand("3.33333e+2"), Some(333.333));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
    }

    #[test]
    fn test_parse_in_progress_entries() {
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("0."), Some(0.0));
        assert_eq!(parse_operand("-0."), Some(0.0));
        assert_eq!(parse_operand("1e-7."), Some(1e-7));
        assert_eq!(parse_operand("12e"), Some(12.0));
        assert_eq!(parse_operand("12e+"), Some(12.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("Error"), None);
        assert_eq!(parse_operand("e5"), None);
    }

    #[test]
    fn test_round_suppresses_float_noise() {
        assert_eq!(round_to_precision(0.1 + 0.2), 0.3);
        assert_eq!(round_to_precision(1.0 / 3.0), 0.333333333333);
        assert_eq!(round_to_precision(6.0), 6.0);
    }

    #[test]
    fn test_round_leaves_huge_values_alone() {
        assert_eq!(round_to_precision(f64::MAX), f64::MAX);
        assert_eq!(round_to_precision(-f64::MAX), -f64::MAX);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_canonical_plain_range() {
        assert_eq!(canonical(0.3), "0.3");
        assert_eq!(canonical(6.0), "6");
        assert_eq!(canonical(-0.5), "-0.5");
        assert_eq!(canonical(0.000001), "0.000001");
        assert_eq!(canonical(1e20), "100000000000000000000");
    }

    #[test]
    fn test_canonical_zero_drops_sign() {
        assert_eq!(canonical(0.0), "0");
        assert_eq!(canonical(-0.0), "0");
    }

    #[test]
    fn test_canonical_exponential_range() {
        assert_eq!(canonical(1e21), "1e+21");
        assert_eq!(canonical(-2.5e22), "-2.5e+22");
        assert_eq!(canonical(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(333.333333333333, 5), "3.33333e+2");
        assert_eq!(to_exponential(-1234.5678, 2), "-1.23e+3");
        assert_eq!(to_exponential(0.000123, 1), "1.2e-4");
        assert_eq!(to_exponential(0.0, 5), "0.00000e+0");
        assert_eq!(to_exponential(7.0, 0), "7e+0");
    }

    #[test]
    fn test_to_exponential_ties_round_up() {
        assert_eq!(to_exponential(1.25, 1), "1.3e+0");
        assert_eq!(to_exponential(-1.25, 1), "-1.3e+0");
        assert_eq!(to_exponential(1234565e9, 5), "1.23457e+15");
        // 0.35 is stored just below the tie
        assert_eq!(to_exponential(0.35, 0), "3e-1");
    }

    #[test]
    fn test_to_exponential_carries_into_exponent() {
        assert_eq!(to_exponential(99.5, 1), "1.0e+2");
        assert_eq!(to_exponential(-999999.5, 5), "-1.00000e+6");
    }

    #[test]
    fn test_format_result_fits_display() {
        assert_eq!(format_result(0.333333333333), "0.333333333333");
        assert_eq!(format_result(33.333333333333), "33.333333333333");
    }

    #[test]
    fn test_format_result_falls_back_to_exponential() {
        let third = round_to_precision(1000.0 / 3.0);
        assert_eq!(format_result(third), "3.33333e+2");
        assert_eq!(format_result(8999999999999991.0), "9.00000e+15");
    }
}
