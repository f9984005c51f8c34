//! Conversion of SQLite timestamps into PostgreSQL-friendly ISO-8601 text.

use core::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// Timestamp layout written by SQLite, e.g. `2024-09-28 23:47:24`.
pub const SQLITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout written to the CSV files, e.g. `2024-09-28T23:47:24`.
pub const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A normalized timestamp and where it came from.
///
/// Normalization never fails: a value that cannot be parsed is replaced by
/// the wall-clock time at the moment of normalization and tagged as
/// [`Timestamp::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Parsed from the source value.
    Parsed(NaiveDateTime),
    /// The source value was absent or malformed; this is the local time of
    /// normalization.
    Fallback(NaiveDateTime),
}

impl Timestamp {
    /// Normalize an optional SQLite timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use strain_dump_extract::datetime::Timestamp;
    ///
    /// let ts = Timestamp::normalize(Some("2024-09-28 23:47:24"));
    /// assert!(!ts.is_fallback());
    /// assert_eq!(ts.to_string(), "2024-09-28T23:47:24");
    ///
    /// assert!(Timestamp::normalize(Some("yesterday")).is_fallback());
    /// ```
    #[must_use]
    pub fn normalize(value: Option<&str>) -> Self {
        match value.and_then(parse_sqlite) {
            Some(parsed) => Self::Parsed(parsed),
            None => Self::Fallback(now()),
        }
    }

    /// The instant this timestamp stands for.
    #[must_use]
    pub fn datetime(&self) -> NaiveDateTime {
        match self {
            Self::Parsed(datetime) | Self::Fallback(datetime) => *datetime,
        }
    }

    /// Whether the source value had to be replaced.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime().format(OUTPUT_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a SQLite timestamp, returning `None` for empty or malformed input.
#[must_use]
pub fn parse_sqlite(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, SQLITE_FORMAT)
        .ok()
        // `%S` accepts the leap second `60`, stored as an extra second of nanoseconds.
        .filter(|parsed| parsed.nanosecond() < 1_000_000_000)
}

/// Local wall-clock time truncated to whole seconds.
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_output_format(text: &str) {
        assert!(
            NaiveDateTime::parse_from_str(text, OUTPUT_FORMAT).is_ok(),
            "{text} is not in the output format"
        );
        assert_eq!(text.len(), "2024-09-28T23:47:24".len());
    }

    #[test]
    fn test_parsed_timestamp_has_no_drift() {
        let ts = Timestamp::normalize(Some("2024-09-28 23:47:24"));
        assert!(matches!(ts, Timestamp::Parsed(_)));
        assert_eq!(ts.to_string(), "2024-09-28T23:47:24");
    }

    #[test]
    fn test_midnight_and_leap_day() {
        assert_eq!(
            Timestamp::normalize(Some("2024-02-29 00:00:00")).to_string(),
            "2024-02-29T00:00:00"
        );
    }

    #[test]
    fn test_missing_value_falls_back() {
        let ts = Timestamp::normalize(None);
        assert!(ts.is_fallback());
        assert_output_format(&ts.to_string());
    }

    #[test]
    fn test_empty_value_falls_back() {
        let ts = Timestamp::normalize(Some(""));
        assert!(ts.is_fallback());
        assert_output_format(&ts.to_string());
    }

    #[test]
    fn test_malformed_values_fall_back() {
        for value in [
            "2024-09-28",
            "2024-09-28T23:47:24",
            "2024-13-01 00:00:00",
            "2024-02-30 10:00:00",
            "28.09.2024 23:47",
            "garbage",
            "2024-09-28 23:59:60",
        ] {
            let ts = Timestamp::normalize(Some(value));
            assert!(ts.is_fallback(), "{value} should not parse");
            assert_output_format(&ts.to_string());
        }
    }

    #[test]
    fn test_fallback_is_close_to_now() {
        let before = now();
        let ts = Timestamp::normalize(None);
        let after = Local::now().naive_local();
        assert!(ts.datetime() >= before && ts.datetime() <= after);
    }
}
