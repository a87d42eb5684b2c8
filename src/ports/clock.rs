//! Clock port for obtaining the current time.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};

use crate::error::ClockError;

/// Provides the current time.
///
/// Abstracting time access allows deterministic tests by substituting
/// a fixed clock for the system clock.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

impl<F> Clock for F
where
    F: Fn() -> Timestamp + Send + Sync,
{
    fn now(&self) -> Timestamp {
        self()
    }
}

/// A point in time with millisecond precision, or the invalid instant.
///
/// The invalid instant is what [`Timestamp::parse`] yields for text it cannot
/// read. It compares equal to itself and sorts before every valid instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The invalid instant.
    pub const INVALID: Self = Self(None);

    /// Parses `text` into a timestamp without ever failing.
    ///
    /// Accepts RFC 3339, RFC 2822, `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]]`. Forms without an offset are read as UTC.
    /// Anything else gives [`Timestamp::INVALID`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        parse_instant(text.trim()).map_or(Self::INVALID, Self::from)
    }

    /// Returns `true` unless this is the invalid instant.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the underlying instant, if valid.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Milliseconds since the Unix epoch, if valid.
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.map(|dt| dt.timestamp_millis())
    }

    /// Formats the instant as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTime`] for the invalid instant.
    pub fn to_iso_string(&self) -> Result<String, ClockError> {
        self.0
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
            .ok_or(ClockError::InvalidTime)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(Some(dt.trunc_subsecs(3)))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_iso_string() {
            Ok(iso) => f.write_str(&iso),
            Err(_) => f.write_str("Invalid Date"),
        }
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    let date = match text.len() {
        4 => NaiveDate::parse_from_str(&format!("{text}-01-01"), "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
    };
    date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|naive| naive.and_utc())
}
