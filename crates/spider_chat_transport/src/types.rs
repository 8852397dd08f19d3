use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// Payload of the start-crawl operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderConfig {
    pub urls: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    Chat { message: String },
    StartCrawl(SpiderConfig),
    StopCrawl,
    /// Raw user text; sent as the request body without parsing.
    UpdateKeywordMappings { body: String },
    /// Raw user text; sent as the request body without parsing.
    UpdateSpiderRules { body: String },
}

/// Reply body of `/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatReply {
    pub response: Option<String>,
    pub error: Option<String>,
}

impl ChatReply {
    /// The assistant's text, or the backend's error text when it sent one instead.
    pub fn into_text(self) -> String {
        self.response.or(self.error).unwrap_or_default()
    }
}

/// Reply body of the spider and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatusReply {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl StatusReply {
    /// Status text to display. Logical failures reported by the backend are
    /// shown like any other status.
    pub fn into_text(self) -> String {
        self.message.or(self.error).unwrap_or_default()
    }
}

/// Completion of one submitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub request_id: RequestId,
    pub result: Result<String, TransportError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("base url cannot carry a path: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Client(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("undecodable response: {0}")]
    Decode(String),
}
