//! Timeout double that never runs its callback.

use std::time::Duration;

use crate::ports::timeout::{Timeout, TimeoutId, TimerCallback};

/// Handle returned by [`NoCallbackTimeout`] for every call.
pub const NO_CALLBACK_TIMEOUT_ID: TimeoutId = TimeoutId::new(1);

/// Scheduler that drops every callback unrun.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallbackTimeout;

impl Timeout for NoCallbackTimeout {
    fn set_timeout(&self, callback: TimerCallback, delay: Option<Duration>) -> TimeoutId {
        tracing::debug!(?delay, "discarding timeout callback");
        drop(callback);
        NO_CALLBACK_TIMEOUT_ID
    }
}

/// Returns the no-callback scheduler.
#[must_use]
pub fn no_callback_timeout() -> NoCallbackTimeout {
    NoCallbackTimeout
}
