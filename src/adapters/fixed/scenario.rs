//! Catalogue of canned fetch scenarios, selectable by name.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::fetch::{
    aggregate_error_fetch, bad_request_fetch, broken_json_fetch,
    graphql_introspection_disabled_fetch, graphql_invalid_body_fetch,
    graphql_invalid_schema_fetch, internal_server_error_fetch, not_found_fetch, timeout_fetch,
    unknown_content_type_fetch,
};
use crate::ports::fetch::Fetch;

/// A named canned fetch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Empty 400.
    BadRequest,
    /// Empty 404.
    NotFound,
    /// Empty 500.
    InternalServerError,
    /// 200 JSON that does not parse.
    BrokenJson,
    /// Empty 200 with `application/unknown`.
    UnknownContentType,
    /// Connection timeout.
    Timeout,
    /// 200 JSON with an aggregated error.
    AggregateError,
    /// 200 with GraphQL introspection disabled.
    #[value(name = "graphql-introspection-disabled")]
    #[serde(rename = "graphql-introspection-disabled")]
    GraphQlIntrospectionDisabled,
    /// 200 with an invalid GraphQL schema.
    #[value(name = "graphql-invalid-schema")]
    #[serde(rename = "graphql-invalid-schema")]
    GraphQlInvalidSchema,
    /// 200 with a non-GraphQL body.
    #[value(name = "graphql-invalid-body")]
    #[serde(rename = "graphql-invalid-body")]
    GraphQlInvalidBody,
}

impl Scenario {
    /// Every scenario, in catalogue order.
    pub const ALL: [Self; 10] = [
        Self::BadRequest,
        Self::NotFound,
        Self::InternalServerError,
        Self::BrokenJson,
        Self::UnknownContentType,
        Self::Timeout,
        Self::AggregateError,
        Self::GraphQlIntrospectionDisabled,
        Self::GraphQlInvalidSchema,
        Self::GraphQlInvalidBody,
    ];

    /// Builds the fetcher for this scenario.
    #[must_use]
    pub fn fetch(self) -> Box<dyn Fetch> {
        match self {
            Self::BadRequest => Box::new(bad_request_fetch()),
            Self::NotFound => Box::new(not_found_fetch()),
            Self::InternalServerError => Box::new(internal_server_error_fetch()),
            Self::BrokenJson => Box::new(broken_json_fetch()),
            Self::UnknownContentType => Box::new(unknown_content_type_fetch()),
            Self::Timeout => Box::new(timeout_fetch()),
            Self::AggregateError => Box::new(aggregate_error_fetch()),
            Self::GraphQlIntrospectionDisabled => Box::new(graphql_introspection_disabled_fetch()),
            Self::GraphQlInvalidSchema => Box::new(graphql_invalid_schema_fetch()),
            Self::GraphQlInvalidBody => Box::new(graphql_invalid_body_fetch()),
        }
    }

    /// The status the scenario answers with, or `None` when it fails instead.
    #[must_use]
    pub fn status(self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::NotFound => Some(404),
            Self::InternalServerError => Some(500),
            Self::Timeout => None,
            _ => Some(200),
        }
    }

    /// The kebab-case name used on the command line and in profiles.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BadRequest => "bad-request",
            Self::NotFound => "not-found",
            Self::InternalServerError => "internal-server-error",
            Self::BrokenJson => "broken-json",
            Self::UnknownContentType => "unknown-content-type",
            Self::Timeout => "timeout",
            Self::AggregateError => "aggregate-error",
            Self::GraphQlIntrospectionDisabled => "graphql-introspection-disabled",
            Self::GraphQlInvalidSchema => "graphql-invalid-schema",
            Self::GraphQlInvalidBody => "graphql-invalid-body",
        }
    }

    /// One-line description of what the scenario represents.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::BadRequest => "client error",
            Self::NotFound => "missing resource",
            Self::InternalServerError => "server failure",
            Self::BrokenJson => "JSON payload missing a closing bracket",
            Self::UnknownContentType => "content type application/unknown",
            Self::Timeout => "connection fails with ETIMEDOUT",
            Self::AggregateError => "upstream error with multiple causes",
            Self::GraphQlIntrospectionDisabled => "GraphQL introspection disabled",
            Self::GraphQlInvalidSchema => "introspection result without a schema",
            Self::GraphQlInvalidBody => "response that is not GraphQL",
        }
    }
}
