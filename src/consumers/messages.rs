//! JSON message retrieval over the fetch port.

use serde::{Deserialize, Serialize};

use crate::ports::fetch::Fetch;

/// Payload of a message response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    /// The message text.
    pub message: String,
}

/// Envelope of a message response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    /// The wrapped payload.
    pub data: MessageData,
}

impl MessageEnvelope {
    /// Wraps `message` in an envelope.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { data: MessageData { message: message.into() } }
    }
}

/// Fetches `{base_url}/message/` and decodes it as a [`MessageEnvelope`].
///
/// Never fails: every problem is reported as the envelope's message.
pub async fn get_json_message(fetch: &dyn Fetch, base_url: &str) -> MessageEnvelope {
    let url = format!("{}/message/", base_url.trim_end_matches('/'));
    let mut response = match fetch.fetch(url.into(), None).await {
        Ok(response) => response,
        Err(err) => return MessageEnvelope::new(format!("Error: {err}")),
    };
    if !response.ok() {
        return MessageEnvelope::new("Message error!");
    }
    if response.header("Content-Type") != Some("application/json") {
        return MessageEnvelope::new("Error: Content-Type is not application/json");
    }
    match response.json::<MessageEnvelope>().await {
        Ok(envelope) => envelope,
        Err(err) => MessageEnvelope::new(format!("Error: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{fixed_response_fetch, internal_server_error_fetch};
    use crate::consumers::DEFAULT_BASE_URL;
    use crate::http::{Body, ResponseInit};

    #[tokio::test]
    async fn non_ok_status_is_a_message_error() {
        let envelope = get_json_message(&internal_server_error_fetch(), DEFAULT_BASE_URL).await;
        assert_eq!(envelope, MessageEnvelope::new("Message error!"));
    }

    #[tokio::test]
    async fn content_type_must_match_exactly() {
        let fetch = fixed_response_fetch(
            Some(Body::from(r#"{"data": {"message": "hi"}}"#)),
            ResponseInit::with_status(200).content_type("application/json; charset=utf-8"),
        );
        let envelope = get_json_message(&fetch, DEFAULT_BASE_URL).await;
        assert_eq!(envelope.data.message, "Error: Content-Type is not application/json");
    }

    #[tokio::test]
    async fn wrong_shape_is_reported() {
        let fetch = fixed_response_fetch(
            Some(Body::from(r#"{"message": "flat"}"#)),
            ResponseInit::with_status(200).content_type("application/json"),
        );
        let envelope = get_json_message(&fetch, DEFAULT_BASE_URL).await;
        assert!(envelope.data.message.starts_with("Error: "));
    }
}
