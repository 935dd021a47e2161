//! API Lambda handler - receives a GitHub webhook and relays it to Slack.
//!
//! This module handles:
//! - Configuration lookup (`SLACK_URL`)
//! - Message derivation (delegated to `parsing`)
//! - Delivery to the Slack incoming webhook

use super::{helpers, parsing};
use crate::core::config::RelayConfig;
use crate::core::models::SlackNotification;
use crate::slack::SlackWebhookClient;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::env;
use tracing::{error, info};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err`; configuration and delivery problems are reported as
/// 500 and 502 responses.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!("Received request");

    Ok(handle(&SlackWebhookClient::shared(), |key| env::var(key).ok(), &event.payload).await)
}

/// Resolves the config through `lookup` and relays `payload` with `client`.
///
/// A missing or invalid `SLACK_URL` answers 500 before any outbound call.
pub async fn handle<F>(client: &SlackWebhookClient, lookup: F, payload: &Value) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let config = match RelayConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return helpers::err_response(500, &e.to_string());
        }
    };

    relay(client, &config, payload).await
}

/// Derives the notification for `payload`, posts it to Slack, and builds the
/// proxy response.
pub async fn relay(client: &SlackWebhookClient, config: &RelayConfig, payload: &Value) -> Value {
    let notification = SlackNotification::new(parsing::derive_message(payload));

    match client
        .post_notification(&config.slack_url, &notification)
        .await
    {
        Ok(_) => helpers::ok_processed(&notification.text),
        Err(e) => {
            error!("Failed to deliver Slack notification: {}", e);
            helpers::delivery_failed(&notification.text)
        }
    }
}
