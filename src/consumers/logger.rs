//! Timestamped in-memory logger.

use crate::adapters::live::LiveClock;
use crate::error::ClockError;
use crate::ports::clock::Clock;

/// Keeps timestamped entries and mirrors them to `tracing`.
pub struct Logger {
    clock: Box<dyn Clock>,
    entries: Vec<String>,
}

impl Logger {
    /// Creates a logger stamping entries with the system time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(LiveClock)
    }

    /// Creates a logger stamping entries with `clock`.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self { clock: Box::new(clock), entries: Vec::new() }
    }

    /// Formats `message` as `"{timestamp} : {message}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTime`] if the clock reports an invalid instant.
    pub fn prepare_log_message(&self, message: &str) -> Result<String, ClockError> {
        Ok(format!("{} : {message}", self.clock.now().to_iso_string()?))
    }

    /// Records `message` and emits it at info level.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTime`] if the clock reports an invalid instant;
    /// nothing is recorded in that case.
    pub fn log(&mut self, message: &str) -> Result<(), ClockError> {
        let entry = self.prepare_log_message(message)?;
        tracing::info!("{entry}");
        self.entries.push(entry);
        Ok(())
    }

    /// Entries recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{fixed_clock, test_clock, TEST_INSTANT};

    #[test]
    fn stamps_with_fixed_clock() {
        let logger = Logger::with_clock(fixed_clock("2023-09-06T00:00:00Z"));
        assert_eq!(
            logger.prepare_log_message("I am a log message!").unwrap(),
            "2023-09-06T00:00:00.000Z : I am a log message!"
        );
    }

    #[test]
    fn stamps_with_test_clock() {
        let logger = Logger::with_clock(test_clock());
        assert_eq!(
            logger.prepare_log_message("I am a log message!").unwrap(),
            format!("{TEST_INSTANT} : I am a log message!")
        );
    }

    #[test]
    fn default_logger_uses_live_time() {
        let logger = Logger::default();
        assert!(logger.prepare_log_message("I am a log message!").unwrap().ends_with("I am a log message!"));
    }

    #[test]
    fn log_records_entries() {
        let mut logger = Logger::with_clock(test_clock());
        logger.log("first").unwrap();
        logger.log("second").unwrap();
        assert_eq!(logger.entries().len(), 2);
        assert!(logger.entries()[1].ends_with(" : second"));
    }

    #[test]
    fn invalid_clock_refuses_to_log() {
        let mut logger = Logger::with_clock(fixed_clock("nonsense"));
        assert_eq!(logger.log("lost"), Err(ClockError::InvalidTime));
        assert!(logger.entries().is_empty());
    }
}
