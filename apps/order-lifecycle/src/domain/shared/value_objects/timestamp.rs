//! Timestamp value object for temporal data.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A UTC timestamp for execution times and activity tracking.
///
/// Venues send transaction times either as RFC 3339 strings or as zone-less
/// ISO date-times; the latter are taken to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime<Utc>.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse from an RFC 3339 string or a naive ISO 8601 date-time.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Ok(Self(dt.with_timezone(&Utc))),
            Err(rfc_err) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Self(naive.and_utc()))
                .map_err(|_| rfc_err),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rfc3339() {
        let ts = Timestamp::parse("2026-01-19T12:00:00Z").unwrap();
        assert_eq!(ts.to_string(), "2026-01-19T12:00:00+00:00");
    }

    #[test]
    fn parse_offset_is_normalized_to_utc() {
        let ts = Timestamp::parse("2026-01-19T14:00:00+02:00").unwrap();
        assert_eq!(ts, Timestamp::parse("2026-01-19T12:00:00Z").unwrap());
    }

    #[test]
    fn parse_naive_as_utc() {
        let naive = Timestamp::parse("2026-01-19T12:00:00.250").unwrap();
        let zoned = Timestamp::parse("2026-01-19T12:00:00.250Z").unwrap();
        assert_eq!(naive, zoned);
    }

    #[test]
    fn parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn ordering() {
        let earlier = Timestamp::parse("2026-01-19T12:00:00Z").unwrap();
        let later = Timestamp::parse("2026-01-19T13:00:00Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn deserialize_accepts_naive_string() {
        let ts: Timestamp = serde_json::from_str("\"2026-01-19T12:00:00\"").unwrap();
        assert_eq!(ts.to_string(), "2026-01-19T12:00:00+00:00");
    }

    #[test]
    fn deserialize_rejects_garbage() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"yesterday\"");
        assert!(result.is_err());
    }
}
