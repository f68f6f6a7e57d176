//! Raw text → canonical half-width candidate text.
//!
//! Normalization is minimal and non-destructive: a field mid-edit must never
//! be silently mangled. Rejecting illegal characters is the validator's job,
//! not the normalizer's, and no locale-sensitive numeric parsing happens here.

use std::borrow::Cow;

use memchr::memchr2;

/// UTF-8 lead byte shared by every character this module rewrites except the
/// ASCII comma (the full-width forms all live in U+FF0C..U+FF19).
const FULLWIDTH_LEAD: u8 = 0xEF;

/// A value as the host delivers it: absent, text, or a number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValue<'a> {
    Absent,
    Text(&'a str),
    Number(f64),
}

/// Normalize an external value to a canonical candidate string.
///
/// Absent values normalize to `""`; numbers are rendered to text first and
/// then normalized like any other text.
///
/// # Examples
///
/// ```
/// use numeric::{RawValue, normalize_value};
///
/// assert_eq!(normalize_value(RawValue::Absent), "");
/// assert_eq!(normalize_value(RawValue::Text("１２３")), "123");
/// assert_eq!(normalize_value(RawValue::Number(42.0)), "42");
/// assert_eq!(normalize_value(RawValue::Number(-1.5)), "-1.5");
/// ```
pub fn normalize_value(value: RawValue<'_>) -> String {
    match value {
        RawValue::Absent => String::new(),
        RawValue::Text(s) => normalize(s).into_owned(),
        RawValue::Number(n) => normalize(&n.to_string()).into_owned(),
    }
}

/// Normalize raw field text to a canonical candidate string.
///
/// Rules, applied per character:
/// - full-width digits `０`..`９` map to their half-width equivalents
/// - full-width period `．` and full-width minus `－` map to `.` and `-`
/// - grouping separators `,` and `，` are stripped
/// - every other character is left untouched
///
/// Returns `Cow::Borrowed` when nothing needs rewriting (fast path). The
/// function is idempotent: `normalize(normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use numeric::normalize;
///
/// assert_eq!(normalize("1234.5"), "1234.5");
/// assert_eq!(normalize("１２３"), "123");
/// assert_eq!(normalize("１２３，４５６"), "123456");
/// assert_eq!(normalize("－１．５"), "-1.5");
/// assert_eq!(normalize("1,234"), "1234");
/// assert_eq!(normalize("abc"), "abc");
/// ```
pub fn normalize(s: &str) -> Cow<'_, str> {
    if memchr2(b',', FULLWIDTH_LEAD, s.as_bytes()).is_none() {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut changed = false;
    for ch in s.chars() {
        match ch {
            '０'..='９' => {
                out.push((b'0' + (ch as u32 - '０' as u32) as u8) as char);
                changed = true;
            }
            '．' => {
                out.push('.');
                changed = true;
            }
            '－' => {
                out.push('-');
                changed = true;
            }
            ',' | '，' => changed = true,
            _ => out.push(ch),
        }
    }

    if changed { Cow::Owned(out) } else { Cow::Borrowed(s) }
}
