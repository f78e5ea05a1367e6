//! # Temporal Types: UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only, seconds-precision instant used for every
//! validity window in the verifier.
//!
//! ## Invariant
//!
//! Verification never reads the wall clock itself. Callers pass "now" in as a
//! `Timestamp`, which keeps every rule deterministic and testable against
//! fixed instants. [`Timestamp::now()`] exists only for the outer surfaces
//! (CLI, bindings) that decide what "now" means.
//!
//! ## Calendar Dates
//!
//! Certificate statements carry calendar dates (`YYYY-MM-DD`) for
//! vaccination, first positive test, and recovery validity bounds. These are
//! interpreted as UTC midnight via [`Timestamp::parse_date()`]. The shape is
//! checked strictly: four-digit year, two-digit month, two-digit day.

use chrono::{DateTime, NaiveDate, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::from_epoch_secs()`]: from Unix seconds.
/// - [`Timestamp::parse()`]: strict RFC 3339 with `Z` suffix.
/// - [`Timestamp::parse_lenient()`]: RFC 3339 with any offset, converted to UTC.
/// - [`Timestamp::parse_date()`]: `YYYY-MM-DD` as UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, ValidationError> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTimestamp(format!("epoch seconds out of range: {secs}")))
    }

    /// Parse an RFC 3339 timestamp, rejecting anything but the `Z` suffix.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with('Z') {
            return Err(ValidationError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        Self::parse_lenient(s)
    }

    /// Parse an RFC 3339 timestamp with any offset, converting to UTC.
    ///
    /// Certificate test statements carry collection times with arbitrary
    /// offsets (`2021-06-01T10:00:00+02:00`), so this is the parser the rule
    /// engine uses.
    pub fn parse_lenient(s: &str) -> Result<Self, ValidationError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| ValidationError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a `YYYY-MM-DD` calendar date as UTC midnight.
    pub fn parse_date(s: &str) -> Result<Self, ValidationError> {
        if !is_date_shaped(s) {
            return Err(ValidationError::InvalidDate(s.to_string()));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(s.to_string()))?;
        Ok(Self::from_date(date))
    }

    /// UTC midnight at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Truncate to UTC midnight of the same day.
    pub fn start_of_day(&self) -> Self {
        let secs = self.epoch_secs();
        let truncated = secs - secs.rem_euclid(SECONDS_PER_DAY);
        Self::from_epoch_secs(truncated).unwrap_or(*self)
    }

    /// Offset by a whole number of days (negative values move backwards).
    pub fn plus_days(&self, days: i64) -> Result<Self, ValidationError> {
        let delta = TimeDelta::try_days(days)
            .ok_or_else(|| ValidationError::InvalidTimestamp(format!("day offset out of range: {days}")))?;
        self.plus(delta)
    }

    /// Offset by a whole number of hours (negative values move backwards).
    pub fn plus_hours(&self, hours: i64) -> Result<Self, ValidationError> {
        let delta = TimeDelta::try_hours(hours)
            .ok_or_else(|| ValidationError::InvalidTimestamp(format!("hour offset out of range: {hours}")))?;
        self.plus(delta)
    }

    fn plus(&self, delta: TimeDelta) -> Result<Self, ValidationError> {
        self.0
            .checked_add_signed(delta)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTimestamp(format!("{self} + {delta} overflows")))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO8601 with Z suffix (e.g., `2021-07-01T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Render the calendar date part (e.g., `2021-07-01`).
    pub fn to_date_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

fn is_date_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2021, 7, 1, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.to_iso8601(), "2021-07-01T12:30:45Z");
    }

    #[test]
    fn test_parse_strict_rejects_offsets() {
        assert!(Timestamp::parse("2021-07-01T12:00:00Z").is_ok());
        assert!(Timestamp::parse("2021-07-01T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2021-07-01T14:00:00+02:00").is_err());
    }

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2021-07-01T14:00:00+02:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2021-07-01T12:00:00Z");
    }

    #[test]
    fn test_parse_lenient_rejects_date_only() {
        assert!(Timestamp::parse_lenient("2021-07-01").is_err());
        assert!(Timestamp::parse_lenient("").is_err());
    }

    #[test]
    fn test_parse_date_is_utc_midnight() {
        let ts = Timestamp::parse_date("2021-03-04").unwrap();
        assert_eq!(ts.to_iso8601(), "2021-03-04T00:00:00Z");
        assert_eq!(ts.to_date_string(), "2021-03-04");
    }

    #[test]
    fn test_parse_date_rejects_loose_shapes() {
        for bad in ["2021-3-04", "2021-03-4", "21-03-04", "2021/03/04", "2021-03-04T00:00:00Z", "", "2021-02-30"] {
            assert!(Timestamp::parse_date(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_start_of_day() {
        let ts = Timestamp::parse("2021-07-01T23:59:59Z").unwrap();
        assert_eq!(ts.start_of_day().to_iso8601(), "2021-07-01T00:00:00Z");
        let midnight = Timestamp::parse("2021-07-01T00:00:00Z").unwrap();
        assert_eq!(midnight.start_of_day(), midnight);
    }

    #[test]
    fn test_start_of_day_before_epoch() {
        let ts = Timestamp::parse("1969-12-31T18:00:00Z").unwrap();
        assert_eq!(ts.start_of_day().to_iso8601(), "1969-12-31T00:00:00Z");
    }

    #[test]
    fn test_plus_days_and_hours() {
        let ts = Timestamp::parse("2021-07-01T12:00:00Z").unwrap();
        assert_eq!(ts.plus_days(14).unwrap().to_iso8601(), "2021-07-15T12:00:00Z");
        assert_eq!(ts.plus_days(-1).unwrap().to_iso8601(), "2021-06-30T12:00:00Z");
        assert_eq!(ts.plus_hours(40).unwrap().to_iso8601(), "2021-07-03T04:00:00Z");
    }

    #[test]
    fn test_plus_overflow_is_error() {
        let ts = Timestamp::parse("2021-07-01T12:00:00Z").unwrap();
        assert!(ts.plus_days(i64::MAX).is_err());
        assert!(ts.plus_hours(i64::MAX / 2).is_err());
    }

    #[test]
    fn test_epoch_roundtrip() {
        let ts = Timestamp::parse("2021-07-01T12:00:00Z").unwrap();
        assert_eq!(Timestamp::from_epoch_secs(ts.epoch_secs()).unwrap(), ts);
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2021-07-01T12:00:00Z").unwrap();
        let later = Timestamp::parse("2021-07-01T12:00:01Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_display_matches_iso8601() {
        let ts = Timestamp::parse("2021-06-30T23:59:59Z").unwrap();
        assert_eq!(format!("{ts}"), "2021-06-30T23:59:59Z");
    }
}
