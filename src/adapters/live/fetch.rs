//! Live adapter for the `Fetch` port using `reqwest`.

use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::http::{RequestInit, Response, Target};
use crate::ports::fetch::{Fetch, FetchFuture};

/// Live fetcher that performs real HTTP requests.
#[derive(Debug, Clone)]
pub struct LiveFetch {
    client: Client,
}

impl LiveFetch {
    /// Creates a live fetcher with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Creates a live fetcher around an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for LiveFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for LiveFetch {
    fn fetch(&self, target: Target, init: Option<RequestInit>) -> FetchFuture<'_> {
        let (url_text, init) = target.into_parts(init);

        Box::pin(async move {
            let url = Url::parse(&url_text).map_err(|e| FetchError::InvalidTarget {
                target: url_text.clone(),
                reason: e.to_string(),
            })?;
            tracing::debug!(%url, method = %init.method, "sending request");

            let mut request = self.client.request(init.method, url).headers(init.headers);
            if let Some(body) = init.body {
                request = request.body(body.into_bytes());
            }

            let response = request.send().await.map_err(|e| {
                tracing::warn!(error = %e, "request failed");
                if e.is_timeout() {
                    FetchError::ConnectionTimeout
                } else {
                    FetchError::Network(e)
                }
            })?;

            let status = response.status();
            let headers = response.headers().clone();
            let bytes = response.bytes().await?;
            Ok(Response::from_parts(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default().to_string(),
                headers,
                (!bytes.is_empty()).then(|| bytes.to_vec()),
            ))
        })
    }
}
