//! Live exit adapter using `std::process::exit`.

use crate::ports::exit::Exit;

/// Terminates the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Exit for ProcessExit {
    fn exit(&self, code: i32) -> ! {
        tracing::debug!(code, "terminating process");
        std::process::exit(code)
    }
}
