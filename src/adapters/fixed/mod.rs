//! Deterministic doubles for every capability.
//!
//! Each double has a fixed behavior chosen at construction: a frozen clock,
//! canned fetch responses, an exit that unwinds, and a scheduler that never
//! runs its callbacks.

pub mod clock;
pub mod exit;
pub mod fetch;
pub mod scenario;
pub mod timeout;

pub use clock::{fixed_clock, test_clock, FixedClock, TEST_INSTANT};
pub use exit::{catch_exit, do_not_exit, DoNotExit};
pub use fetch::{
    aggregate_error_fetch, bad_request_fetch, broken_json_fetch, fixed_response_fetch,
    graphql_introspection_disabled_fetch, graphql_invalid_body_fetch,
    graphql_invalid_schema_fetch, internal_server_error_fetch, not_found_fetch, timeout_fetch,
    unknown_content_type_fetch, FixedResponseFetch, TimeoutFetch,
};
pub use scenario::Scenario;
pub use timeout::{no_callback_timeout, NoCallbackTimeout, NO_CALLBACK_TIMEOUT_ID};
