//! Relative timestamps.

use markupui_core::{Block, Build, Environment, HasAttributes, HasChildren, Node, configurable, html};
use markupui_format::relative_time;
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

/// `YYYY-MM-DD HH:MM` in UTC, used as the hover title.
#[must_use]
pub fn absolute_time(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02} UTC",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute()
    )
}

/// Configuration for [`TimeAgo`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TimeAgoConfig {
    /// The instant described.
    pub at: OffsetDateTime,
}

impl Block for TimeAgoConfig {
    const NAME: &'static str = "time-ago";
}

impl Build for TimeAgoConfig {
    fn build(&self, env: &Environment) -> Node {
        let datetime = self.at.format(&Rfc3339).unwrap_or_else(|error| {
            tracing::debug!(%error, "timestamp has no RFC 3339 form");
            String::new()
        });
        html::element("time")
            .class(Self::NAME)
            .attr("datetime", Some(datetime).filter(|text| !text.is_empty()))
            .attr("title", absolute_time(self.at))
            .text(env.translate(&relative_time(self.at, env.now())))
            .into()
    }
}

configurable!(
    /// `5 minutes ago`, measured against the environment's clock.
    TimeAgo,
    TimeAgoConfig
);

impl TimeAgo {
    /// Describes `at`.
    pub fn new(env: &Environment, at: OffsetDateTime) -> Self {
        Self::from_config(env, TimeAgoConfig { at })
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::{Render, host::FixedClock};
    use time::macros::datetime;

    use super::*;

    fn env() -> Environment {
        Environment::builder()
            .clock(FixedClock(datetime!(2024-06-15 12:00:00 UTC)))
            .build()
    }

    #[test]
    fn past_instant() {
        let markup = TimeAgo::new(&env(), datetime!(2024-06-15 09:30:00 UTC)).render();
        assert_eq!(
            markup,
            r#"<time class="time-ago" datetime="2024-06-15T09:30:00Z" title="2024-06-15 09:30 UTC">2 hours ago</time>"#
        );
    }

    #[test]
    fn future_instant_and_offsets() {
        let markup = TimeAgo::new(&env(), datetime!(2024-06-18 14:00:00 +2)).render();
        assert!(markup.contains(r#"datetime="2024-06-18T14:00:00+02:00""#));
        assert!(markup.contains(r#"title="2024-06-18 12:00 UTC""#));
        assert!(markup.ends_with(">in 3 days</time>"));
    }

    #[test]
    fn title_is_utc() {
        assert_eq!(absolute_time(datetime!(2023-01-02 00:05:00 -1)), "2023-01-02 01:05 UTC");
    }
}
