//! Currency formatting for payment amounts.
//!
//! Renders an amount the way an `en-US` USD currency formatter does, with an
//! adaptive fraction width: never fewer than two digits, and up to seven
//! when the input text itself carries that much precision.

/// Fewest fraction digits ever rendered.
pub const MIN_FRACTION_DIGITS: usize = 2;

/// Most fraction digits ever rendered.
pub const MAX_FRACTION_DIGITS: usize = 7;

/// Parse amount text leniently.
///
/// The longest numeric prefix (`[+-]digits[.digits]`) is parsed; text without
/// one, or a value that overflows to infinity, yields `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    numeric_prefix(text.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Number of fraction digits to render for `text`.
///
/// Uses the length of the segment after the first `.`, clamped to
/// `[MIN_FRACTION_DIGITS, MAX_FRACTION_DIGITS]`. An empty segment or no `.`
/// at all gives the minimum.
pub fn fraction_digits(text: &str) -> usize {
    let Some((_, rest)) = text.split_once('.') else {
        return MIN_FRACTION_DIGITS;
    };
    let decimals = rest.split('.').next().map_or(0, |s| s.chars().count());
    if decimals == 0 {
        return MIN_FRACTION_DIGITS;
    }
    decimals.clamp(MIN_FRACTION_DIGITS, MAX_FRACTION_DIGITS)
}

/// Format amount text as a dollar string, e.g. `"1234.5"` -> `"$1,234.50"`.
pub fn format_amount(text: &str) -> String {
    format_usd(parse_amount(text), fraction_digits(text))
}

/// Format a value as US dollars with at most `max_fraction` fraction digits.
///
/// Rounds half-up on the shortest decimal representation of `value` and drops
/// trailing zeros beyond the second fraction digit.
pub fn format_usd(value: f64, max_fraction: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let places = max_fraction.clamp(MIN_FRACTION_DIGITS, MAX_FRACTION_DIGITS);

    // f64 Display never switches to exponent notation.
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let (int_digits, mut frac_digits) = round_half_up(int_part, frac_part, places);

    while frac_digits.len() > MIN_FRACTION_DIGITS && frac_digits.ends_with('0') {
        frac_digits.pop();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac_digits}", group_thousands(&int_digits))
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if has_digits { &text[..end] } else { "" }
}

fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.extend(
        frac_part
            .bytes()
            .map(|b| b - b'0')
            .chain(std::iter::repeat(0))
            .take(places),
    );

    let round_up = frac_part.as_bytes().get(places).is_some_and(|&b| b >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let to_string = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_string(&digits[..split]), to_string(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_two_digit_amount() {
        assert_eq!(format_amount("2.34"), "$2.34");
        assert_eq!(format_amount("53.13"), "$53.13");
    }

    #[test]
    fn keeps_long_precision_up_to_seven_digits() {
        assert_eq!(format_amount("194.1599137"), "$194.1599137");
        assert_eq!(format_amount("0.123456789"), "$0.1234568");
    }

    #[test]
    fn zero_and_empty_render_as_zero_dollars() {
        assert_eq!(format_amount("0"), "$0.00");
        assert_eq!(format_amount(""), "$0.00");
        assert_eq!(format_amount("abc"), "$0.00");
        assert_eq!(format_amount("."), "$0.00");
    }

    #[test]
    fn integers_get_two_fraction_digits() {
        assert_eq!(format_amount("10"), "$10.00");
        assert_eq!(format_amount("5."), "$5.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount("1234567.5"), "$1,234,567.50");
        assert_eq!(format_amount("1000"), "$1,000.00");
        assert_eq!(format_amount("999"), "$999.00");
    }

    #[test]
    fn trailing_zeros_trimmed_to_minimum() {
        assert_eq!(format_amount("12.300"), "$12.30");
        assert_eq!(format_amount("12.30"), "$12.30");
        assert_eq!(format_amount("1.1000000"), "$1.10");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_amount("9.9999999999"), "$10.00");
        assert_eq!(format_usd(999.999, 2), "$1,000.00");
    }

    #[test]
    fn rounds_half_up_on_shortest_representation() {
        assert_eq!(format_usd(1.005, 2), "$1.01");
        assert_eq!(format_usd(0.125, 2), "$0.13");
        assert_eq!(format_usd(0.124, 2), "$0.12");
    }

    #[test]
    fn fraction_digits_follow_input_precision() {
        assert_eq!(fraction_digits("1"), 2);
        assert_eq!(fraction_digits("1.5"), 2);
        assert_eq!(fraction_digits("1.123"), 3);
        assert_eq!(fraction_digits("1.1234567"), 7);
        assert_eq!(fraction_digits("1.123456789"), 7);
        assert_eq!(fraction_digits("1."), 2);
    }

    #[test]
    fn fraction_digits_use_first_decimal_segment() {
        assert_eq!(fraction_digits("1.2.3456"), 2);
        assert_eq!(format_amount("1.2.3"), "$1.20");
    }

    #[test]
    fn parse_uses_numeric_prefix() {
        assert_eq!(parse_amount("12.5abc"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount("x12"), 0.0);
    }

    #[test]
    fn overflowing_input_is_treated_as_zero() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), 0.0);
        assert_eq!(format_amount(&huge), "$0.00");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_usd(-4.5, 2), "-$4.50");
    }
}
