//! Canonical text → display text, plus blur-time rounding.

use std::borrow::Cow;

// Tokens that are never grouped or rounded.
fn passes_through(value: &str) -> bool {
    matches!(value, "" | "-" | "." | "-.")
}

/// Group the integer portion of a canonical value into 3-digit clusters.
///
/// In-progress tokens pass through unchanged, a lone leading minus and an
/// empty integer portion are tolerated, and the fractional portion is
/// reattached untouched. Digit counts are never altered here; padding to a
/// fixed number of decimal places happens only at blur, via
/// [`round_half_up`].
///
/// Returns `Cow::Borrowed` when no grouping mark is inserted. Values that
/// are not well-formed numbers are returned verbatim rather than rewritten.
///
/// # Examples
///
/// ```
/// use numeric::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("-1234.5"), "-1,234.5");
/// assert_eq!(group_thousands("123"), "123");
/// assert_eq!(group_thousands(".5"), ".5");
/// assert_eq!(group_thousands("-"), "-");
/// ```
pub fn group_thousands(value: &str) -> Cow<'_, str> {
    if passes_through(value) {
        return Cow::Borrowed(value);
    }

    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    if digits.len() <= 3 {
        return Cow::Borrowed(value);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + digits.len() / 3);
    out.push_str(sign);
    let head = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    out.push_str(&digits[..head]);
    let mut rest = &digits[head..];
    while !rest.is_empty() {
        out.push(',');
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    Cow::Owned(out)
}

/// Round a canonical value to exactly `places` digits after the decimal
/// point, half-up with ties away from zero, padding with zeros when the
/// fraction is shorter than `places`.
///
/// Rounding is digit-wise on the decimal string, so values with no exact
/// binary representation still round the way they read.
///
/// # Examples
///
/// ```
/// use numeric::round_half_up;
///
/// assert_eq!(round_half_up("1.5", 2), "1.50");
/// assert_eq!(round_half_up("1.005", 2), "1.01");
/// assert_eq!(round_half_up("-2.675", 2), "-2.68");
/// assert_eq!(round_half_up("9.99", 1), "10.0");
/// assert_eq!(round_half_up("3", 2), "3.00");
/// ```
///
/// In-progress tokens and values that are not well-formed numbers are
/// returned unchanged.
pub fn round_half_up(value: &str, places: u32) -> String {
    let places = places as usize;
    let (sign, magnitude) = match value.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", value),
    };
    let (int_digits, frac_digits) = match magnitude.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, frac_digits),
        None => (magnitude, ""),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return value.to_string();
    }
    if !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return value.to_string();
    }

    if frac_digits.len() <= places {
        let mut out = String::with_capacity(sign.len() + int_digits.len() + 1 + places);
        out.push_str(sign);
        out.push_str(int_digits);
        if places > 0 {
            out.push('.');
            out.push_str(frac_digits);
            for _ in frac_digits.len()..places {
                out.push('0');
            }
        }
        return out;
    }

    // The fraction is longer than `places`: cut it there and propagate the
    // half-up carry through the kept digits.
    let mut digits: Vec<u8> = Vec::with_capacity(int_digits.len() + places);
    digits.extend_from_slice(int_digits.as_bytes());
    digits.extend_from_slice(&frac_digits.as_bytes()[..places]);

    let mut carry = frac_digits.as_bytes()[places] >= b'5';
    for d in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
        }
    }

    let int_len = int_digits.len();
    let mut out = String::with_capacity(sign.len() + digits.len() + 2);
    out.push_str(sign);
    if carry {
        out.push('1');
    }
    for &d in &digits[..int_len] {
        out.push(d as char);
    }
    if places > 0 {
        out.push('.');
        for &d in &digits[int_len..] {
            out.push(d as char);
        }
    }
    if out == sign {
        // Rounding away an empty integer portion at zero places would leave
        // nothing at all.
        out.push('0');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-5000"), "-5,000");
    }

    #[test]
    fn short_values_stay_borrowed() {
        for value in ["", "-", ".", "-.", "0", "999", "-123", ".5", "-.5"] {
            assert!(
                matches!(group_thousands(value), Cow::Borrowed(_)),
                "{value:?} should not be rewritten"
            );
        }
    }

    #[test]
    fn fraction_reattached_unchanged() {
        assert_eq!(group_thousands("1234.5678"), "1,234.5678");
        assert_eq!(group_thousands("1234."), "1,234.");
        assert_eq!(group_thousands("1234.000"), "1,234.000");
    }

    #[test]
    fn malformed_values_shown_verbatim() {
        assert_eq!(group_thousands("abc12345"), "abc12345");
        assert_eq!(group_thousands("12345abc"), "12345abc");
        assert_eq!(group_thousands("１２３４５６"), "１２３４５６");
    }

    #[test]
    fn stripping_group_marks_recovers_the_value() {
        for value in ["1234", "1234567", "-98765", "1234.5678", "1000000.001"] {
            let grouped = group_thousands(value);
            let stripped: String = grouped.chars().filter(|&c| c != ',').collect();
            assert_eq!(stripped, value);
            assert_eq!(
                stripped.parse::<f64>().ok(),
                value.parse::<f64>().ok(),
                "grouping must not change the parsed value of {value:?}"
            );
        }
    }

    #[test]
    fn rounding_pads_short_fractions() {
        assert_eq!(round_half_up("1.5", 2), "1.50");
        assert_eq!(round_half_up("3", 2), "3.00");
        assert_eq!(round_half_up("5.", 1), "5.0");
        assert_eq!(round_half_up("-7", 3), "-7.000");
        assert_eq!(round_half_up(".5", 2), ".50");
    }

    #[test]
    fn rounding_cuts_long_fractions() {
        assert_eq!(round_half_up("1.004", 2), "1.00");
        assert_eq!(round_half_up("1.005", 2), "1.01");
        assert_eq!(round_half_up("1.0049", 2), "1.00");
    }

    #[test]
    fn carry_propagates_into_the_integer() {
        assert_eq!(round_half_up("9.99", 1), "10.0");
        assert_eq!(round_half_up("99.95", 1), "100.0");
        assert_eq!(round_half_up(".95", 1), "1.0");
        assert_eq!(round_half_up("999.9995", 3), "1000.000");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_half_up("0.125", 2), "0.13");
        assert_eq!(round_half_up("-0.125", 2), "-0.13");
        assert_eq!(round_half_up("-2.675", 2), "-2.68");
    }

    #[test]
    fn zero_places_drops_the_fraction() {
        assert_eq!(round_half_up("2.4", 0), "2");
        assert_eq!(round_half_up("2.5", 0), "3");
        assert_eq!(round_half_up("-2.5", 0), "-3");
        assert_eq!(round_half_up("5.", 0), "5");
        assert_eq!(round_half_up(".4", 0), "0");
    }

    #[test]
    fn in_progress_and_malformed_values_unchanged() {
        for value in ["", "-", ".", "-.", "abc", "1.2.3"] {
            assert_eq!(round_half_up(value, 2), value);
        }
    }
}
