//! Backend timestamps
//!
//! The game backend emits naive ISO-8601 datetimes (`2024-05-01T12:00:00.123456`)
//! but nothing stops it from sending offset-qualified RFC 3339 values instead.
//! `Timestamp` accepts both and normalizes to UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Short human-readable form for log lists (`2024-05-01 12:00`)
    pub fn display_short(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl FromStr for Timestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(with_offset.with_timezone(&Utc)));
        }

        // Naive values carry no zone; treat them as UTC.
        if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
            return Ok(Self(naive.and_utc()));
        }

        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
            .map(|naive| Self(naive.and_utc()))
            .map_err(|_| DomainError::invalid_timestamp(s))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_naive_backend_format_as_utc() {
        let ts: Timestamp = "2024-05-01T12:30:45.123456".parse().expect("naive timestamp");
        let dt = ts.as_datetime();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 5, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 30, 45));
        assert_eq!(dt.nanosecond(), 123_456_000);
    }

    #[test]
    fn parses_naive_without_fraction() {
        let ts: Timestamp = "2024-05-01T12:30:45".parse().expect("naive timestamp");
        assert_eq!(ts.as_datetime().second(), 45);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts: Timestamp = "2024-05-01T14:30:45+02:00".parse().expect("rfc3339");
        assert_eq!(ts.as_datetime().hour(), 12);
    }

    #[test]
    fn parses_space_separated_form() {
        let ts: Timestamp = "2024-05-01 12:30:45".parse().expect("space separated");
        assert_eq!(ts.as_datetime().minute(), 30);
    }

    #[test]
    fn rejects_garbage() {
        let err = "yesterday".parse::<Timestamp>().expect_err("should fail");
        assert_eq!(err, DomainError::InvalidTimestamp("yesterday".to_string()));
    }

    #[test]
    fn serializes_as_rfc3339_utc() {
        let ts: Timestamp = "2024-05-01T12:30:45".parse().expect("naive timestamp");
        let json = serde_json::to_string(&ts).expect("serialize");
        assert_eq!(json, "\"2024-05-01T12:30:45Z\"");
    }

    #[test]
    fn display_short_drops_seconds() {
        let ts: Timestamp = "2024-05-01T12:30:45".parse().expect("naive timestamp");
        assert_eq!(ts.display_short(), "2024-05-01 12:30");
    }
}
