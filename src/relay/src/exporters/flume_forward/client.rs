use super::error::{FlumeForwardError, FlumeForwardResult};
use super::outcome::DeliveryOutcome;
use crate::config::Config;
use crate::envelope::{wire_payload, Envelope};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info};

/// HTTP client for a single Flume agent
#[derive(Clone)]
pub struct FlumeForward {
    endpoint: String,
    client: Client,
}

impl FlumeForward {
    pub fn try_new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(FlumeForward {
            endpoint: config.flume_url(),
            client: builder.build().context("Failed to build Flume HTTP client")?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `envelope` once and reports how it went.
    pub async fn deliver(&self, envelope: &Envelope) -> DeliveryOutcome {
        let start_time = Instant::now();
        let result = self.send(envelope).await;

        match &result {
            Ok(()) => info!(
                "Successfully sent {} to Flume agent, elapsed: {:?}",
                envelope.event_type,
                start_time.elapsed()
            ),
            Err(e) => error!(
                "Error sending {} to Flume agent at {}: {}",
                envelope.event_type, self.endpoint, e
            ),
        }

        result.into()
    }

    async fn send(&self, envelope: &Envelope) -> FlumeForwardResult<()> {
        let payload = wire_payload(envelope)?;
        let body = serde_json::to_vec(&payload)?;

        debug!("Posting {} bytes to {}", body.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FlumeForwardError::server_error(status.as_u16()))
        }
    }
}
