//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// This timestamp, raised to `floor` if it is earlier.
    ///
    /// Wall clocks can step backwards; `updatedAt` must not.
    pub fn not_before(self, floor: Timestamp) -> Self {
        self.max(floor)
    }

    /// RFC 3339 text with full sub-second precision, as stored on disk.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }

    /// Parses RFC 3339 text.
    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc)))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn not_before_keeps_later_of_the_two() {
        let earlier = Timestamp::now();
        sleep(Duration::from_millis(10));
        let later = Timestamp::now();

        assert_eq!(earlier.not_before(later), later);
        assert_eq!(later.not_before(earlier), later);
    }

    #[test]
    fn not_before_respects_future_floor() {
        let future = Timestamp::from_datetime(Utc::now() + chrono::Duration::days(1));
        assert_eq!(Timestamp::now().not_before(future), future);
    }

    #[test]
    fn rfc3339_text_keeps_precision() {
        let ts = Timestamp::now();
        let parsed = Timestamp::parse_rfc3339(&ts.to_rfc3339()).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();

        assert_eq!(ts.as_datetime().year(), 2024);
    }
}
