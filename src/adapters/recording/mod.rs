//! Recording adapters that capture interactions for later assertions.

pub mod fetch;

pub use fetch::{RecordedRequest, RecordingFetch, RequestLog};
