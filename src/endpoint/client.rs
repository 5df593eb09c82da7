//! HTTP client for the lead endpoint
//!
//! The endpoint is a script web app that reads the raw request body, so the
//! JSON is sent as `text/plain` to keep it a simple request.

use super::{EndpointReply, LeadSubmitter, SubmissionError};
use crate::config::LeadFormConfig;
use crate::state::SubmissionPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Default lead endpoint
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyD0wSH6Za8XQcseGgHlorq9USuMF6XmDTMgmamo-vkXWVmz3UMz4ImkWW0uLHbwY-M/exec";

const BODY_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Client for posting leads to the endpoint
#[derive(Debug, Clone)]
pub struct EndpointClient {
    client: reqwest::Client,
    url: String,
}

impl EndpointClient {
    /// Create a client for `url`. Without a timeout a hung request waits on
    /// the transport.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &LeadFormConfig) -> Result<Self> {
        Self::new(config.endpoint(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LeadSubmitter for EndpointClient {
    async fn submit(&self, payload: SubmissionPayload) -> Result<EndpointReply, SubmissionError> {
        let body = serde_json::to_string(&payload)?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, BODY_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%status, bytes = text.len(), "endpoint responded");

        Ok(serde_json::from_str(&text)?)
    }
}
