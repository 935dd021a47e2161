//! Issue Relay - forwards GitHub issue webhooks to a Slack channel.
//!
//! A single API Lambda receives the webhook through API Gateway, derives a
//! short message from the payload, and posts it to a Slack incoming webhook
//! configured through `SLACK_URL`.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the Slack incoming-webhook call
//! - serde_json for loosely-typed payload inspection
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use issue_relay::api::relay;
//! use issue_relay::core::config::RelayConfig;
//! use issue_relay::slack::SlackWebhookClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     issue_relay::setup_logging();
//!
//!     let config = RelayConfig::from_env()?;
//!     let event = serde_json::json!({ "body": r#"{"message":"hello"}"# });
//!     let response = relay(&SlackWebhookClient::shared(), &config, &event).await;
//!     println!("{}", response);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The level filter comes from `RUST_LOG` and defaults to `info`. Safe to call
/// more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// issue_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
