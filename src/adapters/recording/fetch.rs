//! Recording adapter for the `Fetch` port.

use std::sync::{Arc, Mutex, PoisonError};

use reqwest::Method;

use crate::http::{Body, RequestInit, Target};
use crate::ports::fetch::{Fetch, FetchFuture};

/// A request seen by a [`RecordingFetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Target URL as text.
    pub url: String,
    /// Effective HTTP method.
    pub method: Method,
    /// Request body, if any.
    pub body: Option<Body>,
}

/// Shared, cloneable log of recorded requests.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<RecordedRequest>>>);

impl RequestLog {
    /// Returns a copy of every request recorded so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of recorded requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, request: RecordedRequest) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(request);
    }
}

/// Records every request while delegating to an inner implementation.
pub struct RecordingFetch {
    inner: Box<dyn Fetch>,
    log: RequestLog,
}

impl RecordingFetch {
    /// Creates a recording fetcher wrapping `inner` with an empty log.
    #[must_use]
    pub fn new(inner: Box<dyn Fetch>) -> Self {
        Self { inner, log: RequestLog::default() }
    }

    /// Returns a handle to the log that stays valid after `self` is moved.
    #[must_use]
    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

impl Fetch for RecordingFetch {
    fn fetch(&self, target: Target, init: Option<RequestInit>) -> FetchFuture<'_> {
        let (url, init) = target.into_parts(init);
        self.log.push(RecordedRequest {
            url: url.clone(),
            method: init.method.clone(),
            body: init.body.clone(),
        });
        self.inner.fetch(Target::Text(url), Some(init))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{not_found_fetch, timeout_fetch};

    #[tokio::test]
    async fn records_requests_and_delegates() {
        let fetch = RecordingFetch::new(Box::new(not_found_fetch()));
        let log = fetch.log();

        let response = fetch.fetch("https://localhost:3000/users/7".into(), None).await.unwrap();
        let post = RequestInit {
            method: Method::POST,
            body: Some(Body::from("payload")),
            ..RequestInit::default()
        };
        fetch.fetch("https://localhost:3000/users".into(), Some(post)).await.unwrap();

        assert_eq!(response.status(), 404);
        let requests = log.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://localhost:3000/users/7");
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].body, Some(Body::from("payload")));
    }

    #[tokio::test]
    async fn records_even_when_the_inner_call_fails() {
        let fetch = RecordingFetch::new(Box::new(timeout_fetch()));
        let log = fetch.log();
        assert!(log.is_empty());

        assert!(fetch.fetch("https://x".into(), None).await.is_err());
        assert_eq!(log.len(), 1);
    }
}
