//! Capability profiles loaded from YAML.
//!
//! A profile selects, per port, whether the live implementation or a
//! deterministic double is used. See [`Profile`] for the document shape.

pub mod format;

use std::path::Path;

pub use format::{ExitMode, FetchFixture, Profile, TimeoutMode};

use crate::adapters::fixed::{fixed_response_fetch, FixedClock};
use crate::error::ProfileError;
use crate::http::{Body, ResponseInit};
use crate::ports::fetch::Fetch;

impl Profile {
    /// Parses a profile from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid profile document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ProfileError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a profile file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ProfileError::Read { path: path.to_path_buf(), source })?;
        serde_yaml::from_str(&content)
            .map_err(|source| ProfileError::Parse { path: path.to_path_buf(), source })
    }

    /// Returns the fixed clock this profile asks for, if any.
    #[must_use]
    pub fn fixed_clock(&self) -> Option<FixedClock> {
        self.clock.as_deref().map(FixedClock::parse)
    }
}

impl FetchFixture {
    /// Builds the fetcher this fixture describes.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::ConflictingFetch`] when a scenario is combined
    /// with response fields, and [`ProfileError::InvalidHeader`] for headers
    /// that are not valid HTTP.
    pub fn build(&self) -> Result<Box<dyn Fetch>, ProfileError> {
        if let Some(scenario) = self.scenario {
            if self.has_response_fields() {
                return Err(ProfileError::ConflictingFetch);
            }
            return Ok(scenario.fetch());
        }

        let mut init = ResponseInit::with_status(self.status.unwrap_or(200));
        if let Some(text) = &self.status_text {
            init.status_text.clone_from(text);
        }
        for (name, value) in &self.headers {
            init = init
                .try_header(name, value)
                .map_err(|reason| ProfileError::InvalidHeader { name: name.clone(), reason })?;
        }
        let body = self.body.clone().map(Body::from);
        Ok(Box::new(fixed_response_fetch(body, init)))
    }
}
