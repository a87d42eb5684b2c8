//! Live clock using the system clock.

use chrono::Utc;

use crate::ports::clock::{Clock, Timestamp};

/// Live clock that returns the real current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> Timestamp {
        Timestamp::from(Utc::now())
    }
}

/// Returns a clock that reads the system time on every call.
#[must_use]
pub fn now_clock() -> LiveClock {
    LiveClock
}
