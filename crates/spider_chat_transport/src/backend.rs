use std::time::Duration;

use chat_logging::chat_debug;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ChatReply, SpiderConfig, StatusReply, TransportError};

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: Url,
    /// `None` leaves connection setup unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` lets a slow request take as long as it needs.
    pub request_timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The five operations the chat backend exposes.
///
/// Every reply that decodes counts as success, whatever its HTTP status.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn chat(&self, message: &str) -> Result<String, TransportError>;

    async fn start_crawl(&self, config: &SpiderConfig) -> Result<String, TransportError>;

    async fn stop_crawl(&self) -> Result<String, TransportError>;

    async fn update_keyword_mappings(&self, raw: &str) -> Result<String, TransportError>;

    async fn update_spider_rules(&self, raw: &str) -> Result<String, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, TransportError> {
        if settings.base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidBaseUrl(
                settings.base_url.to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::Client(err.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url,
        })
    }

    fn endpoint(&self, name: &str) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        name: &str,
        body: Option<String>,
    ) -> Result<T, TransportError> {
        let url = self.endpoint(name)?;
        chat_debug!(
            "POST {} body_len={}",
            url,
            body.as_ref().map_or(0, String::len)
        );

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        chat_debug!("{} replied status={} len={}", name, status, bytes.len());

        serde_json::from_slice(&bytes).map_err(|err| TransportError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn chat(&self, message: &str) -> Result<String, TransportError> {
        let body = serde_json::json!({ "message": message }).to_string();
        let reply: ChatReply = self.post("chat", Some(body)).await?;
        Ok(reply.into_text())
    }

    async fn start_crawl(&self, config: &SpiderConfig) -> Result<String, TransportError> {
        let body =
            serde_json::to_string(config).map_err(|err| TransportError::Client(err.to_string()))?;
        let reply: StatusReply = self.post("start_spider", Some(body)).await?;
        Ok(reply.into_text())
    }

    async fn stop_crawl(&self) -> Result<String, TransportError> {
        let reply: StatusReply = self.post("stop_spider", None).await?;
        Ok(reply.into_text())
    }

    async fn update_keyword_mappings(&self, raw: &str) -> Result<String, TransportError> {
        let reply: StatusReply = self
            .post("update_keyword_mappings", Some(raw.to_string()))
            .await?;
        Ok(reply.into_text())
    }

    async fn update_spider_rules(&self, raw: &str) -> Result<String, TransportError> {
        let reply: StatusReply = self
            .post("update_spider_rules", Some(raw.to_string()))
            .await?;
        Ok(reply.into_text())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(err.to_string());
    }
    TransportError::Network(err.to_string())
}
