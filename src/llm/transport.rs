//! HTTP transport for the report request.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ReportError;

use super::request::ChatRequest;

/// Status and body of an endpoint response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one chat request. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<RawResponse, ReportError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport. With `timeout` unset the request may wait indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ReportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ReportError::ClientBuild)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<RawResponse, ReportError> {
        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(ReportError::Transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ReportError::Transport)?;

        Ok(RawResponse { status, body })
    }
}
