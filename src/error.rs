//! Error types for each capability family.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when formatting a [`Timestamp`](crate::ports::clock::Timestamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The timestamp does not hold a valid instant.
    #[error("RangeError: Invalid time value")]
    InvalidTime,
}

/// Errors produced by a fetch call before a response is available.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection could not be established in time.
    #[error("Connection failed ETIMEDOUT")]
    ConnectionTimeout,

    /// The request target could not be turned into a URL.
    #[error("invalid request target {target:?}: {reason}")]
    InvalidTarget {
        /// The target as given by the caller.
        target: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Response status outside of the constructible range.
    #[error("RangeError: status {0} is outside the range [200, 599]")]
    InvalidStatus(u16),

    /// A body was supplied for a status that must not carry one.
    #[error("TypeError: response with null body status {0} cannot have a body")]
    NullBodyStatus(u16),

    /// Transport failure reported by the HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors produced when reading a response body.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body was already read by an earlier call.
    #[error("TypeError: body has already been consumed")]
    AlreadyConsumed,

    /// The body text is not valid JSON.
    #[error("SyntaxError: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The body is valid JSON but does not fit the requested type.
    #[error("unexpected JSON shape: {0}")]
    Shape(#[source] serde_json::Error),

    /// The live transport failed while streaming the body.
    #[error("network error while reading body: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<serde_json::Error> for BodyError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::Shape(err)
        } else {
            Self::Syntax(err)
        }
    }
}

/// Unwind payload raised by [`DoNotExit`](crate::adapters::fixed::exit::DoNotExit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Exit function was called with code {code}")]
pub struct ExitCalled {
    /// The exit code the caller asked for.
    pub code: i32,
}

/// Errors raised while loading or applying a capability profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile {}: {source}", .path.display())]
    Read {
        /// Path of the profile file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The profile file is not a valid profile document.
    #[error("failed to parse profile {}: {source}", .path.display())]
    Parse {
        /// Path of the profile file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Inline YAML could not be parsed.
    #[error("failed to parse profile: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A fetch fixture names a scenario and also sets response fields.
    #[error("fetch fixture sets both `scenario` and explicit response fields")]
    ConflictingFetch,

    /// A header name or value in a fetch fixture is not valid HTTP.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// The header name as written in the profile.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_called_message_is_exact() {
        assert_eq!(ExitCalled { code: 3 }.to_string(), "Exit function was called with code 3");
        assert_eq!(ExitCalled { code: -1 }.to_string(), "Exit function was called with code -1");
    }

    #[test]
    fn json_syntax_errors_classify_as_syntax() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": 1").unwrap_err();
        let body_err = BodyError::from(err);
        assert!(matches!(body_err, BodyError::Syntax(_)));
        assert!(body_err.to_string().starts_with("SyntaxError: "));
    }

    #[test]
    fn json_data_errors_classify_as_shape() {
        let err = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        assert!(matches!(BodyError::from(err), BodyError::Shape(_)));
    }

    #[test]
    fn timeout_mentions_etimedout() {
        assert!(FetchError::ConnectionTimeout.to_string().contains("ETIMEDOUT"));
    }
}
