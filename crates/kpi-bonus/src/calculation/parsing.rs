//! Conversion of user-entered realization text into numbers.
//!
//! Both parsers are total: anything that cannot be read as a number becomes `0.0`
//! and the result is always finite.

/// Parses a plain number that may use a comma as its decimal separator.
///
/// When a comma is present, dots are treated as thousands separators
/// (`"1.250,5"` reads as `1250.5`). Without a comma the text is read as-is, so
/// `"1.5"` stays `1.5`. An exponent suffix is honored (`"1e5"`), and trailing
/// garbage after a numeric prefix is ignored.
pub fn parse_localized_number(raw: &str) -> f64 {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    if compact.is_empty() {
        return 0.0;
    }

    let normalized = if compact.contains(',') {
        compact.replace('.', "").replace(',', ".")
    } else {
        compact
    };

    leading_number(&normalized)
}

/// Parses a monetary amount grouped with dots (`"300.000.000"`).
///
/// Currency symbols and other decorations are dropped before parsing, so
/// `"Rp 1.500"` reads as `1500`.
pub fn parse_currency(raw: &str) -> f64 {
    let kept: String = raw
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-'))
        .collect();
    if kept.is_empty() {
        return 0.0;
    }

    let normalized = kept.replace('.', "").replace(',', ".");
    finite_or_zero(normalized.parse::<f64>().unwrap_or(0.0))
}

fn leading_number(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        let fraction_digits = fraction_end - fraction_start;
        if fraction_digits > 0 || digits > 0 {
            end = fraction_end;
            digits += fraction_digits;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    finite_or_zero(text[..end].parse::<f64>().unwrap_or(0.0))
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
