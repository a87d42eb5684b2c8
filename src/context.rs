//! Capability bundle handed to consumers.

use crate::adapters::fixed::{fixed_response_fetch, test_clock, DoNotExit, NoCallbackTimeout};
use crate::adapters::live::{LiveClock, LiveFetch, ProcessExit, ThreadTimeout};
use crate::error::ProfileError;
use crate::http::ResponseInit;
use crate::ports::clock::Clock;
use crate::ports::exit::Exit;
use crate::ports::fetch::Fetch;
use crate::ports::timeout::Timeout;
use crate::profile::{ExitMode, Profile, TimeoutMode};

/// Bundles one implementation of every port.
///
/// Constructors wire up different adapter sets (live, deterministic,
/// profile-driven); the `with_*` methods swap a single port.
pub struct Capabilities {
    /// Source of the current time.
    pub clock: Box<dyn Clock>,
    /// Network access.
    pub fetch: Box<dyn Fetch>,
    /// Process termination.
    pub exit: Box<dyn Exit>,
    /// Deferred callbacks.
    pub timeout: Box<dyn Timeout>,
}

impl Capabilities {
    /// Creates a bundle of the real platform implementations.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fetch: Box::new(LiveFetch::new()),
            exit: Box::new(ProcessExit),
            timeout: Box::new(ThreadTimeout::new()),
        }
    }

    /// Creates a bundle of doubles with no real I/O.
    ///
    /// The clock is frozen at the test instant, fetch answers with an empty
    /// 200, exit unwinds and timeouts never fire.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            clock: Box::new(test_clock()),
            fetch: Box::new(fixed_response_fetch(None, ResponseInit::default())),
            exit: Box::new(DoNotExit),
            timeout: Box::new(NoCallbackTimeout),
        }
    }

    /// Creates a bundle as described by `profile`, using live adapters for
    /// every port the profile leaves out.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile's fetch fixture is invalid.
    pub fn from_profile(profile: &Profile) -> Result<Self, ProfileError> {
        let mut caps = Self::live();
        if let Some(clock) = profile.fixed_clock() {
            caps.clock = Box::new(clock);
        }
        if let Some(fixture) = &profile.fetch {
            caps.fetch = fixture.build()?;
        }
        if profile.exit == ExitMode::DoNotExit {
            caps.exit = Box::new(DoNotExit);
        }
        if profile.timeout == TimeoutMode::NoCallback {
            caps.timeout = Box::new(NoCallbackTimeout);
        }
        Ok(caps)
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the fetcher.
    #[must_use]
    pub fn with_fetch(mut self, fetch: impl Fetch + 'static) -> Self {
        self.fetch = Box::new(fetch);
        self
    }

    /// Replaces the fetcher with an already boxed one.
    #[must_use]
    pub fn with_boxed_fetch(mut self, fetch: Box<dyn Fetch>) -> Self {
        self.fetch = fetch;
        self
    }

    /// Replaces the exit implementation.
    #[must_use]
    pub fn with_exit(mut self, exit: impl Exit + 'static) -> Self {
        self.exit = Box::new(exit);
        self
    }

    /// Replaces the timeout scheduler.
    #[must_use]
    pub fn with_timeout(mut self, timeout: impl Timeout + 'static) -> Self {
        self.timeout = Box::new(timeout);
        self
    }
}
