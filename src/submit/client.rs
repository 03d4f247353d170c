//! Webhook delivery over HTTP.
//!
//! The trait keeps the TUI and the reducer tests off the network; the only
//! production implementation is `WebhookClient`, a thin reqwest POST.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::envelope::SubmissionEnvelope;

/// Errors that can occur delivering a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The webhook answered with a non-success status.
    Api { status: u16 },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "network error: {msg}"),
            SubmitError::Api { status } => write!(f, "webhook error (HTTP {status})"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Delivers one envelope. Success is any 2xx status; everything else
    /// is an error. No retries at this layer.
    async fn submit(&self, envelope: &SubmissionEnvelope) -> Result<(), SubmitError>;
}

/// POSTs the envelope as JSON to a fixed webhook URL.
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubmissionClient for WebhookClient {
    async fn submit(&self, envelope: &SubmissionEnvelope) -> Result<(), SubmitError> {
        let json_body = serde_json::to_string(envelope)
            .map_err(|e| SubmitError::Network(format!("envelope serialization failed: {e}")))?;
        info!("Submitting fact finder to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        debug!("Webhook response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Webhook rejected submission: HTTP {status}");
            return Err(SubmitError::Api { status });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let network = SubmitError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "network error: connection refused");

        let api = SubmitError::Api { status: 503 };
        assert_eq!(api.to_string(), "webhook error (HTTP 503)");
    }

    #[test]
    fn test_errors_compare_by_content() {
        assert_eq!(
            SubmitError::Api { status: 500 },
            SubmitError::Api { status: 500 }
        );
        assert_ne!(
            SubmitError::Api { status: 500 },
            SubmitError::Api { status: 404 }
        );
    }
}
