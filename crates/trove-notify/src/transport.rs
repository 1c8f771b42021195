//! Delivery transport for the messaging endpoint.
//!
//! The endpoint is a token-addressed HTTPS API: POST a JSON body with
//! the destination identifier and the message text, get back a JSON
//! acknowledgement with an `ok` flag and, on rejection, an error code
//! and description. The trait seam exists so the dispatcher can be
//! exercised with a recording fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default messaging API host.
const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// JSON body sent to the messaging endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutboundMessage {
    /// Destination chat/channel identifier.
    pub chat_id: String,
    /// Escaped message text.
    pub text: String,
    /// Markup dialect of `text`.
    pub parse_mode: &'static str,
}

impl OutboundMessage {
    pub fn markdown(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: "MarkdownV2",
        }
    }
}

/// Acknowledgement returned by the messaging endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiAck {
    /// Whether the endpoint accepted the message.
    pub ok: bool,
    /// Description accompanying a rejection.
    #[serde(default)]
    pub description: Option<String>,
    /// Upstream error code accompanying a rejection.
    #[serde(default)]
    pub error_code: Option<i64>,
}

impl ApiAck {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            description: None,
            error_code: None,
        }
    }

    pub fn rejected(code: i64, description: impl Into<String>) -> Self {
        Self {
            ok: false,
            description: Some(description.into()),
            error_code: Some(code),
        }
    }
}

/// Errors below the acknowledgement level: the endpoint was never
/// reached, or answered something unreadable.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unreadable response: {0}")]
    BadResponse(String),
}

/// Delivery seam.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(
        &self,
        token: &str,
        message: &OutboundMessage,
    ) -> Result<ApiAck, TransportError>;
}

/// Production transport over `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the transport at a different host, for staging or tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn deliver(
        &self,
        token: &str,
        message: &OutboundMessage,
    ) -> Result<ApiAck, TransportError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, token);
        let response = self
            .client
            .post(&url)
            .json(message)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        // The endpoint answers JSON for rejections too (ok=false plus an
        // error code), so parse the body before judging the status.
        match response.json::<ApiAck>().await {
            Ok(ack) => Ok(ack),
            Err(e) if status.is_success() => Err(TransportError::BadResponse(e.to_string())),
            Err(e) => Err(TransportError::Request(format!("HTTP {status}: {e}"))),
        }
    }
}
