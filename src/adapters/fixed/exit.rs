//! Exit double that unwinds instead of terminating.

use std::panic::{self, AssertUnwindSafe};

use crate::error::ExitCalled;
use crate::ports::exit::Exit;

/// Exit implementation that unwinds with an [`ExitCalled`] payload.
///
/// Tests can observe the requested exit code through [`catch_exit`] instead
/// of losing the test runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoNotExit;

impl Exit for DoNotExit {
    fn exit(&self, code: i32) -> ! {
        tracing::debug!(code, "exit intercepted");
        panic::panic_any(ExitCalled { code })
    }
}

/// Returns the exit double.
#[must_use]
pub fn do_not_exit() -> DoNotExit {
    DoNotExit
}

/// Runs `f`, turning an intercepted exit into an error.
///
/// # Errors
///
/// Returns the [`ExitCalled`] payload if `f` called [`DoNotExit::exit`].
/// Unwinds from any other panic are resumed unchanged.
pub fn catch_exit<T>(f: impl FnOnce() -> T) -> Result<T, ExitCalled> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<ExitCalled>() {
            Ok(exit) => Err(*exit),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
