//! Slack incoming-webhook client
//!
//! All invocations in a warm Lambda container share one pooled HTTP client.

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use tracing::{error, info};

use crate::core::models::SlackNotification;
use crate::errors::RelayError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    http: Client,
}

impl SlackWebhookClient {
    /// Client backed by the process-wide connection pool.
    #[must_use]
    pub fn shared() -> Self {
        Self {
            http: HTTP_CLIENT.clone(),
        }
    }

    /// Client over a caller-supplied `reqwest::Client`, e.g. one routed
    /// through a proxy.
    #[must_use]
    pub fn with_http_client(http: Client) -> Self {
        Self { http }
    }

    /// Posts a notification to an incoming-webhook URL and returns Slack's
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` when the request cannot be sent and
    /// `DeliveryError` when Slack answers with a non-2xx status.
    pub async fn post_notification(
        &self,
        webhook_url: &str,
        notification: &SlackNotification,
    ) -> Result<String, RelayError> {
        let resp = self
            .http
            .post(webhook_url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(notification)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());

        info!("Slack response: status={} body={}", status, body_text);

        if !status.is_success() {
            error!(
                "Slack webhook POST failed: status={} body={}",
                status, body_text
            );
            return Err(RelayError::DeliveryError {
                status: status.as_u16(),
                body: body_text,
            });
        }

        Ok(body_text)
    }
}
