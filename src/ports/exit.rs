//! Exit port for terminating the process.

/// Ends the process with an exit code.
///
/// Implementations never return to the caller: they either terminate the
/// process or unwind.
pub trait Exit: Send + Sync {
    /// Terminates with `code`.
    fn exit(&self, code: i32) -> !;
}
