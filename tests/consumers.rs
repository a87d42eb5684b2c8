//! End-to-end consumer scenarios against the capability doubles.

use standin::adapters::fixed::{
    aggregate_error_fetch, bad_request_fetch, broken_json_fetch, catch_exit, do_not_exit,
    fixed_response_fetch, graphql_introspection_disabled_fetch, graphql_invalid_body_fetch,
    graphql_invalid_schema_fetch, internal_server_error_fetch, no_callback_timeout,
    not_found_fetch, timeout_fetch, unknown_content_type_fetch,
};
use standin::adapters::live::{LiveClock, LiveFetch, ProcessExit, ThreadTimeout};
use standin::consumers::{get_json_message, get_user_by_id, Logger, DEFAULT_BASE_URL};
use standin::http::{Body, ResponseInit};
use standin::ports::{Clock, Exit, Fetch, Timeout};

#[tokio::test]
async fn user_lookup_outcomes() {
    let john = fixed_response_fetch(Some(Body::from("John Doe")), ResponseInit::with_status(200));
    let cases: Vec<(Box<dyn Fetch>, &str)> = vec![
        (Box::new(john), "User John Doe"),
        (Box::new(bad_request_fetch()), "User was not found. Status is 400"),
        (Box::new(not_found_fetch()), "User was not found. Status is 404"),
        (Box::new(internal_server_error_fetch()), "User was not found. Status is 500"),
        (Box::new(timeout_fetch()), "Error: Connection failed ETIMEDOUT"),
        (
            Box::new(aggregate_error_fetch()),
            r#"User {"errors":[{"message":"aaa The first error!, The second error!", "originalError": {"errors": [{"message":"The first error!"}, {"message":"The second error!"}  ] }  }]}"#,
        ),
        (
            Box::new(graphql_introspection_disabled_fetch()),
            r#"User {"errors": [ { "message": "Introspection is disabled"}],"data": null}"#,
        ),
        (
            Box::new(graphql_invalid_schema_fetch()),
            r#"User {"data": {"__schema":"NotAGraphQLSchema", "_service": {"sdl":"NotAGraphQLSchema"}}}"#,
        ),
        (Box::new(graphql_invalid_body_fetch()), r#"User {"message": "I am not GraphQL!"}"#),
    ];

    for (fetch, expected) in cases {
        assert_eq!(get_user_by_id(fetch.as_ref(), DEFAULT_BASE_URL, "1").await, expected);
    }
}

#[tokio::test]
async fn json_message_outcomes() {
    let hello = fixed_response_fetch(
        Some(Body::from(r#"{"data": {"message": "Hello world!"}}"#)),
        ResponseInit::with_status(200).content_type("application/json"),
    );
    assert_eq!(get_json_message(&hello, DEFAULT_BASE_URL).await.data.message, "Hello world!");

    let broken = get_json_message(&broken_json_fetch(), DEFAULT_BASE_URL).await;
    assert!(broken.data.message.contains("SyntaxError"), "{}", broken.data.message);

    let unknown = get_json_message(&unknown_content_type_fetch(), DEFAULT_BASE_URL).await;
    assert_eq!(unknown.data.message, "Error: Content-Type is not application/json");

    let timeout = get_json_message(&timeout_fetch(), DEFAULT_BASE_URL).await;
    assert!(timeout.data.message.contains("ETIMEDOUT"));
}

#[test]
fn exit_double_reports_code() {
    let exit = do_not_exit();
    let err = catch_exit(|| exit.exit(1)).unwrap_err();
    assert_eq!(err.to_string(), "Exit function was called with code 1");
}

#[test]
fn timeout_double_never_logs() {
    let logger = std::sync::Arc::new(std::sync::Mutex::new(Logger::default()));
    let in_callback = std::sync::Arc::clone(&logger);

    let id = no_callback_timeout().set_timeout(
        Box::new(move || {
            let _ = in_callback.lock().unwrap().log("This should not be executed!");
        }),
        Some(std::time::Duration::from_millis(1000)),
    );

    assert_eq!(id.get(), 1);
    assert!(logger.lock().unwrap().entries().is_empty());
}

#[test]
fn live_implementations_fit_the_ports() {
    let clock: Box<dyn Clock> = Box::new(LiveClock);
    let fetch: Box<dyn Fetch> = Box::new(LiveFetch::new());
    let exit: Box<dyn Exit> = Box::new(ProcessExit);
    let timeout: Box<dyn Timeout> = Box::new(ThreadTimeout::new());

    assert!(clock.now().is_valid());
    drop((fetch, exit, timeout));
}
