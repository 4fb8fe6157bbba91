use crate::trimmed;

const SHORT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Abbreviates large counts: `999`, `1.2K`, `1.5M`, `3B`, `2T`.
///
/// A value that rounds up to the next thousand moves to the next suffix,
/// so `999_999` becomes `1M` rather than `1000K`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn short_number(value: i64, precision: usize) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    if magnitude < 1000 {
        return value.to_string();
    }

    let mut scaled = magnitude as f64;
    let mut index = 0;
    while scaled >= 1000.0 && index < SHORT_SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        index += 1;
    }
    let mut text = trimmed(scaled, precision);
    if text == "1000" && index < SHORT_SUFFIXES.len() - 1 {
        index += 1;
        text = "1".into();
    }
    format!("{sign}{text}{}", SHORT_SUFFIXES[index])
}

/// Inserts `separator` between groups of three digits.
#[must_use]
pub fn group_digits(value: i64, separator: &str) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group(&digits, separator);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

/// Formats `value` with exactly `decimals` fraction digits, grouping the
/// integer part with `thousands` and joining with `decimal_point`.
#[must_use]
pub fn format_number(value: f64, decimals: usize, thousands: &str, decimal_point: &str) -> String {
    if !value.is_finite() {
        return "0".into();
    }
    let fixed = format!("{:.decimals$}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let is_zero = fixed.bytes().all(|byte| matches!(byte, b'0' | b'.'));

    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group(integer, thousands));
    if !fraction.is_empty() {
        out.push_str(decimal_point);
        out.push_str(fraction);
    }
    out
}

/// `value / max` clamped to `0.0..=1.0`; zero when `max` is not positive.
#[must_use]
pub fn ratio(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || !max.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// `value` as a percentage of `max`, clamped to `0%..=100%`.
#[must_use]
pub fn percentage(value: f64, max: f64, precision: usize) -> String {
    format!("{}%", trimmed(ratio(value, max) * 100.0, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_numbers() {
        assert_eq!(short_number(999, 1), "999");
        assert_eq!(short_number(1200, 1), "1.2K");
        assert_eq!(short_number(1_500_000, 1), "1.5M");
        assert_eq!(short_number(3_000_000_000, 1), "3B");
        assert_eq!(short_number(-2_500, 1), "-2.5K");
        assert_eq!(short_number(999_999, 1), "1M");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_digits(0, ","), "0");
        assert_eq!(group_digits(1_234_567, ","), "1,234,567");
        assert_eq!(group_digits(-1000, "."), "-1.000");
        assert_eq!(group_digits(999, ","), "999");
    }

    #[test]
    fn fixed_decimals() {
        assert_eq!(format_number(1234.5, 2, ",", "."), "1,234.50");
        assert_eq!(format_number(-0.001, 0, ",", "."), "0");
        assert_eq!(format_number(-9876.0, 0, ".", ","), "-9.876");
        assert_eq!(format_number(f64::NAN, 2, ",", "."), "0");
    }

    #[test]
    fn percentages_are_clamped() {
        assert_eq!(percentage(50.0, 200.0, 1), "25%");
        assert_eq!(percentage(1.0, 3.0, 1), "33.3%");
        assert_eq!(percentage(500.0, 100.0, 0), "100%");
        assert_eq!(percentage(5.0, 0.0, 0), "0%");
    }
}
