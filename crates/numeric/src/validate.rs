//! Canonical text + constraints → validation verdict.

use std::fmt;

/// Constraints a canonical value is validated against.
///
/// Immutable per evaluation; callers re-run [`validate`] whenever the value
/// or the constraints change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// Empty values are an error when set.
    pub required: bool,
    /// Whether a decimal point is accepted at all.
    pub allow_decimal: bool,
    /// Maximum number of digits after the decimal point.
    pub decimal_places: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            required: false,
            allow_decimal: true,
            decimal_places: None,
            min: None,
            max: None,
        }
    }
}

/// The single active validation error, chosen by the fixed check order in
/// [`validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidationError {
    Required,
    Format,
    DecimalPlaces(u32),
    BelowMin(f64),
    AboveMax(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Required => "required",
            Self::Format => "invalid format",
            Self::DecimalPlaces(_) => "too many decimal places",
            Self::BelowMin(_) => "below minimum",
            Self::AboveMax(_) => "above maximum",
        };
        f.write_str(message)
    }
}

/// Result of validating a canonical value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Verdict {
    pub error: Option<ValidationError>,
    /// The value is an incomplete but legal prefix of a number (`"-"`, `"."`,
    /// `"-."`), exempt from the numeric checks until more digits arrive.
    pub in_progress: bool,
}

impl Verdict {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// User-facing message for the active error.
    pub fn message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

/// Validate a canonical value against `constraints`.
///
/// Checks run in a fixed order and the first failure wins: required, shape,
/// in-progress exemption, decimal places, then range. `min` and `max` are
/// checked independently, so a value violating both (only possible under a
/// misconfigured `min > max`) reports the `max` violation.
///
/// # Examples
///
/// ```
/// use numeric::{Constraints, ValidationError, validate};
///
/// let constraints = Constraints {
///     min: Some(0.0),
///     max: Some(100.0),
///     ..Constraints::default()
/// };
/// assert_eq!(validate("42", &constraints).error, None);
/// assert_eq!(
///     validate("150", &constraints).error,
///     Some(ValidationError::AboveMax(100.0)),
/// );
/// assert!(validate("-", &constraints).in_progress);
/// ```
pub fn validate(value: &str, constraints: &Constraints) -> Verdict {
    if value.is_empty() {
        let error = constraints.required.then_some(ValidationError::Required);
        return Verdict {
            error,
            in_progress: false,
        };
    }

    if !matches_numeric_shape(value, constraints.allow_decimal) {
        return Verdict {
            error: Some(ValidationError::Format),
            in_progress: false,
        };
    }

    // A bare "." or "-." only reaches this point when decimals are allowed;
    // otherwise the shape check above already rejected it.
    if matches!(value, "-" | "." | "-.") {
        return Verdict {
            error: None,
            in_progress: true,
        };
    }

    let Ok(number) = value.parse::<f64>() else {
        // Unreachable given the shape check; kept as a guard.
        return Verdict {
            error: Some(ValidationError::Format),
            in_progress: false,
        };
    };

    let mut error = None;

    if constraints.allow_decimal
        && let Some(limit) = constraints.decimal_places
        && let Some((_, frac)) = value.split_once('.')
        && frac.len() > limit as usize
    {
        error = Some(ValidationError::DecimalPlaces(limit));
    }

    if error.is_none() {
        if let Some(min) = constraints.min
            && number < min
        {
            error = Some(ValidationError::BelowMin(min));
        }
        if let Some(max) = constraints.max
            && number > max
        {
            error = Some(ValidationError::AboveMax(max));
        }
    }

    Verdict {
        error,
        in_progress: false,
    }
}

// Equivalent of `^-?[0-9]*(\.[0-9]*)?$`, or `^-?[0-9]*$` when decimals are
// disallowed.
fn matches_numeric_shape(value: &str, allow_decimal: bool) -> bool {
    let bytes = value.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let mut seen_dot = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {}
            b'.' if allow_decimal && !seen_dot => seen_dot = true,
            _ => return false,
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(places: Option<u32>) -> Constraints {
        Constraints {
            decimal_places: places,
            ..Constraints::default()
        }
    }

    fn integer_only() -> Constraints {
        Constraints {
            allow_decimal: false,
            ..Constraints::default()
        }
    }

    #[test]
    fn required_empty_errors() {
        let constraints = Constraints {
            required: true,
            ..Constraints::default()
        };
        let verdict = validate("", &constraints);
        assert_eq!(verdict.error, Some(ValidationError::Required));
        assert!(!verdict.in_progress);
    }

    #[test]
    fn empty_is_valid_when_not_required() {
        let verdict = validate("", &Constraints::default());
        assert_eq!(verdict.error, None);
        assert!(!verdict.in_progress);
    }

    #[test]
    fn shape_violations_are_format_errors() {
        for value in ["abc", "12abc", "1.2.3", "--5", "5-5", "+5", " 5", "1e5"] {
            let verdict = validate(value, &Constraints::default());
            assert_eq!(
                verdict.error,
                Some(ValidationError::Format),
                "expected format error for {value:?}"
            );
        }
    }

    #[test]
    fn integer_only_rejects_any_dot() {
        for value in [".", "-.", "1.5", "12.3"] {
            let verdict = validate(value, &integer_only());
            assert_eq!(
                verdict.error,
                Some(ValidationError::Format),
                "expected format error for {value:?}"
            );
            assert!(!verdict.in_progress);
        }
    }

    #[test]
    fn lone_minus_is_in_progress_in_both_modes() {
        for constraints in [Constraints::default(), integer_only()] {
            let verdict = validate("-", &constraints);
            assert_eq!(verdict.error, None);
            assert!(verdict.in_progress);
        }
    }

    #[test]
    fn dot_tokens_are_in_progress_when_decimals_allowed() {
        for value in [".", "-."] {
            let verdict = validate(value, &Constraints::default());
            assert_eq!(verdict.error, None);
            assert!(verdict.in_progress, "{value:?} should be in progress");
        }
    }

    #[test]
    fn trailing_dot_is_complete_not_in_progress() {
        let verdict = validate("5.", &Constraints::default());
        assert_eq!(verdict.error, None);
        assert!(!verdict.in_progress);
    }

    #[test]
    fn decimal_places_limit_counts_fraction_digits() {
        assert_eq!(validate("1.23", &decimal(Some(2))).error, None);
        assert_eq!(
            validate("1.234", &decimal(Some(2))).error,
            Some(ValidationError::DecimalPlaces(2))
        );
        assert_eq!(validate("1.234", &decimal(None)).error, None);
        // A trailing dot has zero fraction digits.
        assert_eq!(validate("1.", &decimal(Some(0))).error, None);
    }

    #[test]
    fn huge_place_limits_never_flag() {
        // The fraction-length comparison must never truncate either side.
        let value = format!("0.{}", "9".repeat(64));
        assert_eq!(validate(&value, &decimal(Some(u32::MAX))).error, None);
        assert_eq!(
            validate(&value, &decimal(Some(63))).error,
            Some(ValidationError::DecimalPlaces(63))
        );
    }

    #[test]
    fn range_checks_report_the_bound() {
        let constraints = Constraints {
            min: Some(0.0),
            max: Some(100.0),
            ..Constraints::default()
        };
        assert_eq!(
            validate("-5", &constraints).error,
            Some(ValidationError::BelowMin(0.0))
        );
        assert_eq!(
            validate("150", &constraints).error,
            Some(ValidationError::AboveMax(100.0))
        );
        assert_eq!(validate("0", &constraints).error, None);
        assert_eq!(validate("100", &constraints).error, None);
        assert_eq!(
            validate("100.5", &constraints).error,
            Some(ValidationError::AboveMax(100.0))
        );
    }

    #[test]
    fn double_violation_reports_max() {
        // Misconfigured min > max: both checks fire and the later one wins.
        let constraints = Constraints {
            min: Some(10.0),
            max: Some(0.0),
            ..Constraints::default()
        };
        assert_eq!(
            validate("5", &constraints).error,
            Some(ValidationError::AboveMax(0.0))
        );
    }

    #[test]
    fn decimal_places_error_wins_over_range() {
        let constraints = Constraints {
            decimal_places: Some(1),
            max: Some(1.0),
            ..Constraints::default()
        };
        assert_eq!(
            validate("2.345", &constraints).error,
            Some(ValidationError::DecimalPlaces(1))
        );
    }

    #[test]
    fn messages_match_the_error() {
        assert_eq!(ValidationError::Required.to_string(), "required");
        assert_eq!(ValidationError::Format.to_string(), "invalid format");
        assert_eq!(
            ValidationError::DecimalPlaces(2).to_string(),
            "too many decimal places"
        );
        assert_eq!(ValidationError::BelowMin(0.0).to_string(), "below minimum");
        assert_eq!(ValidationError::AboveMax(9.0).to_string(), "above maximum");
    }

    #[test]
    fn verdict_accessors() {
        let verdict = validate("abc", &Constraints::default());
        assert!(verdict.has_error());
        assert_eq!(verdict.message().as_deref(), Some("invalid format"));

        let verdict = validate("1", &Constraints::default());
        assert!(!verdict.has_error());
        assert_eq!(verdict.message(), None);
    }
}
