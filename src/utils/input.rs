//! Form input parsing
//!
//! Numeric form fields are read leniently: leading whitespace and an
//! optional sign are accepted, and parsing stops at the first non-digit, so
//! `"20 years"` reads as `20`.

/// Parse the leading integer of `text`
///
/// Returns `None` when no digit follows the optional sign, or when the value
/// does not fit in an `i64`.
#[must_use]
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Parse the leading integer of `text` into any integer type that can hold it
#[must_use]
pub fn parse_int_prefix_as<T: TryFrom<i64>>(text: &str) -> Option<T> {
    parse_int_prefix(text).and_then(|value| T::try_from(value).ok())
}
