//! Timeout port for scheduling deferred callbacks.

use std::fmt;
use std::time::Duration;

/// Deferred work handed to a [`Timeout`] scheduler.
///
/// Arguments for the callback are captured by the closure.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Opaque handle identifying a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeoutId(u64);

impl TimeoutId {
    /// Wraps a raw handle value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimeoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Schedules callbacks to run after a delay.
pub trait Timeout: Send + Sync {
    /// Schedules `callback` to run once after `delay` (immediately when `None`)
    /// and returns its handle.
    fn set_timeout(&self, callback: TimerCallback, delay: Option<Duration>) -> TimeoutId;
}
