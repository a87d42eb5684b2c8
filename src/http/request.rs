//! Fetch request vocabulary: targets, request options and bodies.

use reqwest::header::HeaderMap;
use reqwest::{Method, Url};

/// Request or response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Body {
    /// Returns the payload as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }

    /// Consumes the body and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Options accompanying a fetch call.
#[derive(Debug, Clone, Default)]
pub struct RequestInit {
    /// HTTP method. Defaults to `GET`.
    pub method: Method,
    /// Request headers.
    pub headers: HeaderMap,
    /// Optional request body.
    pub body: Option<Body>,
}

/// A URL bundled with its request options.
#[derive(Debug, Clone)]
pub struct Request {
    /// The URL to request.
    pub url: Url,
    /// Options for the request.
    pub init: RequestInit,
}

impl Request {
    /// Creates a `GET` request for `url`.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self { url, init: RequestInit::default() }
    }
}

/// What a fetch call is aimed at.
#[derive(Debug, Clone)]
pub enum Target {
    /// A parsed URL.
    Url(Url),
    /// A URL that has not been parsed yet.
    Text(String),
    /// A full request descriptor.
    Request(Request),
}

impl Target {
    /// Returns the target's URL as text.
    #[must_use]
    pub fn url_text(&self) -> &str {
        match self {
            Self::Url(url) => url.as_str(),
            Self::Text(text) => text,
            Self::Request(request) => request.url.as_str(),
        }
    }

    /// Splits the target into URL text and effective options.
    ///
    /// An explicit `init` replaces the options carried by a [`Target::Request`].
    #[must_use]
    pub fn into_parts(self, init: Option<RequestInit>) -> (String, RequestInit) {
        match self {
            Self::Url(url) => (url.into(), init.unwrap_or_default()),
            Self::Text(text) => (text, init.unwrap_or_default()),
            Self::Request(request) => (request.url.into(), init.unwrap_or(request.init)),
        }
    }
}

impl From<&str> for Target {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Target {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Url> for Target {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<Request> for Target {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_target_keeps_its_options_without_override() {
        let mut request = Request::new(Url::parse("https://example.com/a").unwrap());
        request.init.method = Method::POST;

        let (url, init) = Target::from(request).into_parts(None);
        assert_eq!(url, "https://example.com/a");
        assert_eq!(init.method, Method::POST);
    }

    #[test]
    fn explicit_init_overrides_request_options() {
        let mut request = Request::new(Url::parse("https://example.com/a").unwrap());
        request.init.method = Method::POST;

        let override_init = RequestInit { method: Method::DELETE, ..RequestInit::default() };
        let (_, init) = Target::from(request).into_parts(Some(override_init));
        assert_eq!(init.method, Method::DELETE);
    }

    #[test]
    fn text_target_defaults_to_get() {
        let target = Target::from("https://localhost:3000/users/1");
        assert_eq!(target.url_text(), "https://localhost:3000/users/1");
        let (_, init) = target.into_parts(None);
        assert_eq!(init.method, Method::GET);
        assert!(init.body.is_none());
    }

    #[test]
    fn body_bytes_match_text() {
        let body = Body::from("héllo");
        assert_eq!(body.as_bytes(), "héllo".as_bytes());
        assert_eq!(body.into_bytes(), "héllo".as_bytes().to_vec());
    }
}
