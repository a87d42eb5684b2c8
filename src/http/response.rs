//! Response type with single-consumption body semantics.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use super::request::Body;
use crate::error::{BodyError, FetchError};

const TEXT_PLAIN_UTF8: &str = "text/plain;charset=UTF-8";

/// Statuses that must not carry a body.
const NULL_BODY_STATUSES: [u16; 3] = [204, 205, 304];

/// Status line and headers used to build a [`Response`].
#[derive(Debug, Clone)]
pub struct ResponseInit {
    /// Status code. Defaults to 200.
    pub status: u16,
    /// Reason phrase. Defaults to empty.
    pub status_text: String,
    /// Response headers.
    pub headers: HeaderMap,
}

impl Default for ResponseInit {
    fn default() -> Self {
        Self { status: 200, status_text: String::new(), headers: HeaderMap::new() }
    }
}

impl ResponseInit {
    /// Creates an init with the given status and no headers.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self { status, ..Self::default() }
    }

    /// Sets the `Content-Type` header.
    #[must_use]
    pub fn content_type(mut self, value: &'static str) -> Self {
        self.headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        self
    }

    /// Appends a header given as text.
    ///
    /// # Errors
    ///
    /// Returns the reason when `name` or `value` is not valid HTTP.
    pub fn try_header(mut self, name: &str, value: &str) -> Result<Self, String> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| e.to_string())?;
        let value = HeaderValue::from_str(value).map_err(|e| e.to_string())?;
        self.headers.append(name, value);
        Ok(self)
    }
}

/// A fetch response.
///
/// A present body can be read once through [`bytes`](Self::bytes),
/// [`text`](Self::text) or [`json`](Self::json); later reads fail with
/// [`BodyError::AlreadyConsumed`]. An absent body reads as empty every time.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    status_text: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    body_used: bool,
}

impl Response {
    /// Builds a response from an optional body and an init.
    ///
    /// A text body without an explicit `Content-Type` gets
    /// `text/plain;charset=UTF-8`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidStatus`] when the status is outside
    /// 200..=599, and [`FetchError::NullBodyStatus`] when a body is given for
    /// 204, 205 or 304.
    pub fn new(body: Option<Body>, init: ResponseInit) -> Result<Self, FetchError> {
        let ResponseInit { status, status_text, mut headers } = init;
        if !(200..=599).contains(&status) {
            return Err(FetchError::InvalidStatus(status));
        }
        if body.is_some() && NULL_BODY_STATUSES.contains(&status) {
            return Err(FetchError::NullBodyStatus(status));
        }
        if matches!(body, Some(Body::Text(_))) && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8));
        }
        Ok(Self::from_parts(status, status_text, headers, body.map(Body::into_bytes)))
    }

    /// Assembles a response without validation, for transports that already
    /// received a well-formed status line.
    pub(crate) fn from_parts(
        status: u16,
        status_text: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Self {
        Self { status, status_text, headers, body, body_used: false }
    }

    /// `true` when the status is in 200..300.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The numeric status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The reason phrase.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// All response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Looks up a header by name, ignoring ASCII case.
    ///
    /// Returns `None` when the header is missing or not visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// `true` once a present body has been read.
    #[must_use]
    pub fn body_used(&self) -> bool {
        self.body_used
    }

    /// Reads the body as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::AlreadyConsumed`] if the body was read before.
    #[allow(clippy::unused_async)]
    pub async fn bytes(&mut self) -> Result<Vec<u8>, BodyError> {
        self.take_body()
    }

    /// Reads the body as UTF-8 text, replacing invalid sequences.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::AlreadyConsumed`] if the body was read before.
    #[allow(clippy::unused_async)]
    pub async fn text(&mut self) -> Result<String, BodyError> {
        let bytes = self.take_body()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reads the body and decodes it as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::AlreadyConsumed`] if the body was read before,
    /// [`BodyError::Syntax`] if the text is not JSON (an empty body included),
    /// and [`BodyError::Shape`] if the JSON does not fit `T`.
    #[allow(clippy::unused_async)]
    pub async fn json<T: DeserializeOwned>(&mut self) -> Result<T, BodyError> {
        let bytes = self.take_body()?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn take_body(&mut self) -> Result<Vec<u8>, BodyError> {
        if self.body_used {
            return Err(BodyError::AlreadyConsumed);
        }
        match self.body.take() {
            Some(bytes) => {
                self.body_used = true;
                Ok(bytes)
            }
            None => Ok(Vec::new()),
        }
    }
}
