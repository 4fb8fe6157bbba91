use time::OffsetDateTime;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Largest unit first; a unit is used once the distance reaches its length.
const STEPS: [(i64, &str); 6] = [
    (YEAR, "year"),
    (MONTH, "month"),
    (WEEK, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
];

/// Describes `then` relative to `now`: `just now`, `5 minutes ago`,
/// `in 2 days`, `1 year ago`.
///
/// Distances under ten seconds read as `just now`. Months are thirty days
/// and years 365; counts are truncated, never rounded up.
#[must_use]
pub fn relative_time(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let seconds = (now - then).whole_seconds();
    let distance = seconds.abs();
    if distance < 10 {
        return "just now".into();
    }

    let (count, unit) = STEPS
        .iter()
        .find(|(length, _)| distance >= *length)
        .map_or((distance, "second"), |(length, unit)| (distance / length, *unit));
    let plural = if count == 1 { "" } else { "s" };

    if seconds >= 0 {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::datetime};

    use super::*;

    const NOW: OffsetDateTime = datetime!(2024-06-15 12:00:00 UTC);

    fn ago(duration: Duration) -> String {
        relative_time(NOW - duration, NOW)
    }

    #[test]
    fn recent_instants_are_just_now() {
        assert_eq!(ago(Duration::ZERO), "just now");
        assert_eq!(ago(Duration::seconds(9)), "just now");
        assert_eq!(ago(Duration::seconds(-9)), "just now");
    }

    #[test]
    fn past_instants() {
        assert_eq!(ago(Duration::seconds(45)), "45 seconds ago");
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(119)), "1 hour ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(14)), "2 weeks ago");
        assert_eq!(ago(Duration::days(65)), "2 months ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn future_instants() {
        assert_eq!(ago(Duration::hours(-5)), "in 5 hours");
        assert_eq!(ago(Duration::days(-1)), "in 1 day");
    }
}
