//! Indonesian presentation helpers for calculation results.

use crate::calculation::NEUTRAL_INDICATOR_COLOR;

/// Formats an amount as Rupiah, e.g. `Rp 1.234.567,5`.
///
/// At most two fraction digits are kept and trailing zeros are dropped.
pub fn format_rupiah(value: f64) -> String {
    if !value.is_finite() {
        return "Rp 0".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut text = String::from("Rp ");
    text.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        text.push(',');
        text.push_str(fraction);
    }

    let is_zero = whole.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        text.insert(0, '-');
    }
    text
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Presentation color for an indicator name, matched on English or
/// Indonesian keywords.
pub fn indicator_tone(name: &str) -> &'static str {
    let name = name.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));

    if has(&["excellent", "luar biasa"]) {
        "bg-green-500"
    } else if has(&["good", "baik"]) {
        "bg-blue-600"
    } else if has(&["average", "memenuhi"]) {
        "bg-yellow-500"
    } else if has(&["under", "kurang"]) {
        "bg-pink-500"
    } else if has(&["bad", "perbaikan"]) {
        "bg-red-600"
    } else {
        NEUTRAL_INDICATOR_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(950.0), "Rp 950");
        assert_eq!(format_rupiah(1_000.0), "Rp 1.000");
        assert_eq!(format_rupiah(250_000_000.0), "Rp 250.000.000");
        assert_eq!(format_rupiah(1_950_000_000.0), "Rp 1.950.000.000");
    }

    #[test]
    fn keeps_at_most_two_fraction_digits() {
        assert_eq!(format_rupiah(1_234.5), "Rp 1.234,5");
        assert_eq!(format_rupiah(1_234.567), "Rp 1.234,57");
        assert_eq!(format_rupiah(12.001), "Rp 12");
    }

    #[test]
    fn negative_and_non_finite_values() {
        assert_eq!(format_rupiah(-25_000.0), "-Rp 25.000");
        assert_eq!(format_rupiah(-0.001), "Rp 0");
        assert_eq!(format_rupiah(f64::NAN), "Rp 0");
        assert_eq!(format_rupiah(f64::INFINITY), "Rp 0");
    }

    #[test]
    fn tones_follow_indicator_keywords() {
        assert_eq!(indicator_tone("Excellent"), "bg-green-500");
        assert_eq!(indicator_tone("Sangat Baik"), "bg-blue-600");
        assert_eq!(indicator_tone("Memenuhi Ekspektasi"), "bg-yellow-500");
        assert_eq!(indicator_tone("Under Perform"), "bg-pink-500");
        assert_eq!(indicator_tone("Perlu Perbaikan"), "bg-red-600");
        assert_eq!(indicator_tone("N/A"), "bg-slate-400");
    }
}
