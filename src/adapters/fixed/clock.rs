//! Fixed clock that always reports the same instant.

use crate::ports::clock::{Clock, Timestamp};

/// Shared fixture instant, as an ISO 8601 string.
pub const TEST_INSTANT: &str = "1001-01-01T00:00:00.000Z";

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at the instant `text` parses to.
    ///
    /// Unparsable text yields a clock that reports [`Timestamp::INVALID`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let instant = Timestamp::parse(text);
        if !instant.is_valid() {
            tracing::debug!(text, "fixed clock created with an unparsable instant");
        }
        Self::new(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }
}

/// Returns a clock frozen at the instant `text` parses to.
#[must_use]
pub fn fixed_clock(text: &str) -> FixedClock {
    FixedClock::parse(text)
}

/// Returns a clock frozen at [`TEST_INSTANT`].
#[must_use]
pub fn test_clock() -> FixedClock {
    FixedClock::parse(TEST_INSTANT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_same_instant_every_time() {
        let clock = fixed_clock("2023-09-06T00:00:00Z");
        let first = clock.now();
        for _ in 0..5 {
            assert_eq!(clock.now(), first);
        }
        assert_eq!(first.to_string(), "2023-09-06T00:00:00.000Z");
    }

    #[test]
    fn test_clock_reports_test_instant() {
        assert_eq!(test_clock().now().to_iso_string().unwrap(), TEST_INSTANT);
    }

    #[test]
    fn invalid_text_still_yields_a_callable_clock() {
        let clock = fixed_clock("yesterday-ish");
        assert!(!clock.now().is_valid());
        assert_eq!(clock.now(), clock.now());
    }
}
