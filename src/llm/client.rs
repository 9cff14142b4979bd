//! Report generation against the configured endpoint.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ReportError;
use crate::report::SYSTEM_PROMPT;

use super::request::ChatRequest;
use super::response::extract_reply;
use super::transport::ChatTransport;

/// Sends the rendered commit log to the model and returns its reply.
pub struct ReportClient<'a> {
    transport: &'a dyn ChatTransport,
    url: String,
    api_key: String,
    model: String,
}

impl<'a> ReportClient<'a> {
    pub fn new(
        transport: &'a dyn ChatTransport,
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_config(transport: &'a dyn ChatTransport, config: &Config) -> Self {
        Self::new(
            transport,
            &config.openai_base_url,
            &config.openai_api_key,
            &config.openai_model,
        )
    }

    /// Build the request for a rendered log.
    pub fn build_request(&self, log: &str) -> ChatRequest {
        ChatRequest::new(&self.model, SYSTEM_PROMPT, log)
    }

    /// Generate a report from a rendered log.
    ///
    /// Transport failures are errors. A response without
    /// `choices[0].message.content` yields an empty report.
    pub async fn generate(&self, log: &str) -> Result<String, ReportError> {
        let request = self.build_request(log);
        debug!(
            "Sending {} chars of commit log to {} (model {})",
            log.chars().count(),
            self.url,
            self.model
        );

        let response = self
            .transport
            .post_chat(&self.url, &self.api_key, &request)
            .await?;

        if !response.is_success() {
            warn!("Report endpoint returned HTTP {}", response.status);
        }

        match extract_reply(&response.body) {
            Some(reply) => Ok(reply),
            None => {
                let preview: String = response.body.chars().take(200).collect();
                warn!("Response has no choices[0].message.content, using empty report: {}", preview);
                Ok(String::new())
            }
        }
    }
}
