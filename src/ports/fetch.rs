//! Fetch port for network requests.

use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;
use crate::http::{RequestInit, Response, Target};

/// Boxed future type alias used by [`Fetch`] to keep the trait dyn-compatible.
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Response, FetchError>> + Send + 'a>>;

/// Performs network requests.
///
/// Abstracting fetch allows tests to substitute canned responses and
/// simulated failures for real I/O.
pub trait Fetch: Send + Sync {
    /// Requests `target` with optional `init` and resolves to the response.
    ///
    /// # Errors
    ///
    /// The future resolves to an error when no response could be produced
    /// (timeout, transport failure, invalid target). HTTP error statuses are
    /// ordinary responses.
    fn fetch(&self, target: Target, init: Option<RequestInit>) -> FetchFuture<'_>;
}

impl<F> Fetch for F
where
    F: Fn(Target, Option<RequestInit>) -> FetchFuture<'static> + Send + Sync,
{
    fn fetch(&self, target: Target, init: Option<RequestInit>) -> FetchFuture<'_> {
        self(target, init)
    }
}
