//! Fetch doubles returning canned responses or simulated failures.

use crate::error::FetchError;
use crate::http::{Body, RequestInit, Response, ResponseInit, Target};
use crate::ports::fetch::{Fetch, FetchFuture};

/// JSON body missing its closing bracket.
pub const BROKEN_JSON_BODY: &str = r#"{"data": {"message": "Missing bracket"}"#;

/// JSON body reporting one error that aggregates two causes.
pub const AGGREGATE_ERROR_BODY: &str = r#"{"errors":[{"message":"aaa The first error!, The second error!", "originalError": {"errors": [{"message":"The first error!"}, {"message":"The second error!"}  ] }  }]}"#;

/// GraphQL response rejecting an introspection query.
pub const GRAPHQL_INTROSPECTION_DISABLED_BODY: &str =
    r#"{"errors": [ { "message": "Introspection is disabled"}],"data": null}"#;

/// GraphQL introspection result whose schema fields hold plain strings.
pub const GRAPHQL_INVALID_SCHEMA_BODY: &str =
    r#"{"data": {"__schema":"NotAGraphQLSchema", "_service": {"sdl":"NotAGraphQLSchema"}}}"#;

/// JSON body that is not a GraphQL response at all.
pub const GRAPHQL_INVALID_BODY: &str = r#"{"message": "I am not GraphQL!"}"#;

/// Fetcher that ignores its request and answers with the same response.
///
/// Every call builds a fresh [`Response`], so each caller gets an unread body.
#[derive(Debug, Clone)]
pub struct FixedResponseFetch {
    body: Option<Body>,
    init: ResponseInit,
}

impl FixedResponseFetch {
    /// Creates a fetcher answering with `body` and `init`.
    #[must_use]
    pub fn new(body: Option<Body>, init: ResponseInit) -> Self {
        Self { body, init }
    }
}

impl Fetch for FixedResponseFetch {
    fn fetch(&self, target: Target, _init: Option<RequestInit>) -> FetchFuture<'_> {
        tracing::debug!(url = target.url_text(), status = self.init.status, "fixed response");
        let response = Response::new(self.body.clone(), self.init.clone());
        Box::pin(async move { response })
    }
}

/// Fetcher whose every call fails with [`FetchError::ConnectionTimeout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutFetch;

impl Fetch for TimeoutFetch {
    fn fetch(&self, target: Target, _init: Option<RequestInit>) -> FetchFuture<'_> {
        tracing::debug!(url = target.url_text(), "simulating connection timeout");
        Box::pin(async { Err::<Response, _>(FetchError::ConnectionTimeout) })
    }
}

/// Returns a fetcher that always answers with `body` and `init`.
#[must_use]
pub fn fixed_response_fetch(body: Option<Body>, init: ResponseInit) -> FixedResponseFetch {
    FixedResponseFetch::new(body, init)
}

/// Empty 400 Bad Request.
#[must_use]
pub fn bad_request_fetch() -> FixedResponseFetch {
    fixed_response_fetch(None, ResponseInit::with_status(400))
}

/// Empty 404 Not Found.
#[must_use]
pub fn not_found_fetch() -> FixedResponseFetch {
    fixed_response_fetch(None, ResponseInit::with_status(404))
}

/// Empty 500 Internal Server Error.
#[must_use]
pub fn internal_server_error_fetch() -> FixedResponseFetch {
    fixed_response_fetch(None, ResponseInit::with_status(500))
}

/// 200 with a JSON content type and a body that does not parse.
#[must_use]
pub fn broken_json_fetch() -> FixedResponseFetch {
    fixed_response_fetch(Some(Body::from(BROKEN_JSON_BODY)), json_ok())
}

/// Empty 200 with `Content-Type: application/unknown`.
#[must_use]
pub fn unknown_content_type_fetch() -> FixedResponseFetch {
    fixed_response_fetch(None, ResponseInit::with_status(200).content_type("application/unknown"))
}

/// Every call fails with a connection timeout.
#[must_use]
pub fn timeout_fetch() -> TimeoutFetch {
    TimeoutFetch
}

/// 200 JSON reporting an aggregated upstream error.
#[must_use]
pub fn aggregate_error_fetch() -> FixedResponseFetch {
    fixed_response_fetch(Some(Body::from(AGGREGATE_ERROR_BODY)), json_ok())
}

/// 200 with a GraphQL "introspection is disabled" error.
#[must_use]
pub fn graphql_introspection_disabled_fetch() -> FixedResponseFetch {
    fixed_response_fetch(
        Some(Body::from(GRAPHQL_INTROSPECTION_DISABLED_BODY)),
        ResponseInit::with_status(200),
    )
}

/// 200 with an introspection result that holds no schema.
#[must_use]
pub fn graphql_invalid_schema_fetch() -> FixedResponseFetch {
    fixed_response_fetch(
        Some(Body::from(GRAPHQL_INVALID_SCHEMA_BODY)),
        ResponseInit::with_status(200),
    )
}

/// 200 with a JSON body unrelated to GraphQL.
#[must_use]
pub fn graphql_invalid_body_fetch() -> FixedResponseFetch {
    fixed_response_fetch(Some(Body::from(GRAPHQL_INVALID_BODY)), ResponseInit::with_status(200))
}

fn json_ok() -> ResponseInit {
    ResponseInit::with_status(200).content_type("application/json")
}
