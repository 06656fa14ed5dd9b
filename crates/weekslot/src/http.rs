//! `reqwest`-backed [`Transport`].

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, WeekSlotError};
use crate::submit::{SubmissionPayload, SubmitConfig, Transport};

/// Posts payloads as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &SubmitConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeekSlotError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn post_events(&self, payload: &SubmissionPayload) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| WeekSlotError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| WeekSlotError::Transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| WeekSlotError::Transport(e.to_string()))
    }
}
