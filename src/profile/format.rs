//! Profile document structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::adapters::fixed::Scenario;

/// A capability profile: which implementation backs each port.
///
/// Omitted keys select the live implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Instant the clock is frozen at.
    pub clock: Option<String>,
    /// Canned fetch behavior.
    pub fetch: Option<FetchFixture>,
    /// Exit behavior.
    pub exit: ExitMode,
    /// Timeout scheduler behavior.
    pub timeout: TimeoutMode,
}

/// Canned fetch behavior: a named scenario or an explicit response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchFixture {
    /// Named scenario. Excludes every other field.
    pub scenario: Option<Scenario>,
    /// Response status. Defaults to 200.
    pub status: Option<u16>,
    /// Reason phrase.
    pub status_text: Option<String>,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body text.
    pub body: Option<String>,
}

impl FetchFixture {
    /// `true` when any explicit response field is set.
    #[must_use]
    pub fn has_response_fields(&self) -> bool {
        self.status.is_some()
            || self.status_text.is_some()
            || !self.headers.is_empty()
            || self.body.is_some()
    }
}

/// Which exit implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitMode {
    /// Terminate the process.
    #[default]
    Live,
    /// Unwind with the exit code instead.
    DoNotExit,
}

/// Which timeout scheduler to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutMode {
    /// Run callbacks on background threads.
    #[default]
    Live,
    /// Never run callbacks.
    NoCallback,
}
