//! Live timeout scheduler backed by sleeping threads.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use crate::ports::timeout::{Timeout, TimeoutId, TimerCallback};

/// Runs each callback on its own thread after the requested delay.
///
/// Handles are assigned sequentially starting at 1.
#[derive(Debug)]
pub struct ThreadTimeout {
    next_id: AtomicU64,
}

impl ThreadTimeout {
    /// Creates a scheduler whose first handle is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: AtomicU64::new(1) }
    }
}

impl Default for ThreadTimeout {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeout for ThreadTimeout {
    fn set_timeout(&self, callback: TimerCallback, delay: Option<Duration>) -> TimeoutId {
        let id = TimeoutId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let delay = delay.unwrap_or_default();
        tracing::debug!(%id, ?delay, "scheduling callback");
        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            callback();
        });
        id
    }
}
