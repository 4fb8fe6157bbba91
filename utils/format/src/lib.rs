//! Human-readable formatting for values shown in admin screens.
//!
//! - [`bytes`] turns byte counts into `1.5 MiB` or `1.5 MB`,
//! - [`relative_time`] describes an instant relative to now,
//! - [`short_number`], [`group_digits`], [`format_number`] and
//!   [`percentage`] cover counters and statistics.
//!
//! Everything here is pure; locale specifics are the caller's concern.

mod bytes;
mod number;
mod relative;

pub use bytes::{ParseUnitsError, Units, bytes};
pub use number::{format_number, group_digits, percentage, ratio, short_number};
pub use relative::relative_time;

/// Formats `value` with at most `precision` fraction digits, dropping
/// trailing zeros and a dangling decimal point.
pub(crate) fn trimmed(value: f64, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let kept = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(kept);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::trimmed;

    #[test]
    fn trimming_drops_only_fraction_zeros() {
        assert_eq!(trimmed(1.0, 1), "1");
        assert_eq!(trimmed(1.50, 2), "1.5");
        assert_eq!(trimmed(100.0, 0), "100");
        assert_eq!(trimmed(2.75, 0), "3");
    }
}
