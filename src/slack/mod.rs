//! All Slack-specific functionality

pub mod client;
pub mod message_formatter;

// Re-export main types for convenience
pub use client::SlackWebhookClient;
pub use message_formatter::{FALLBACK_MESSAGE, PARSE_ERROR_MESSAGE, format_event_message};
