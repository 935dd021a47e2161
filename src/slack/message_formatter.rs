//! Turns webhook bodies into the text posted to Slack.

use crate::core::models::{IssueEvent, WebhookEvent};

/// Text used when the body is missing or has no recognized shape.
pub const FALLBACK_MESSAGE: &str = "Webhook received";

/// Text forwarded when the body cannot be parsed.
pub const PARSE_ERROR_MESSAGE: &str = "Error parsing webhook data";

/// Formats an issue event using Slack mrkdwn, one field per line.
///
/// # Examples
///
/// ```
/// use issue_relay::core::models::IssueEvent;
/// use issue_relay::slack::message_formatter::format_issue_message;
///
/// let issue = IssueEvent {
///     action: "opened".into(),
///     number: 7,
///     title: "Bug".into(),
///     html_url: "http://x/1".into(),
/// };
/// assert_eq!(
///     format_issue_message(&issue),
///     "🎯 Issue #7 was *opened*\n*Title:* Bug\n*URL:* http://x/1"
/// );
/// ```
#[must_use]
pub fn format_issue_message(issue: &IssueEvent) -> String {
    format!(
        "🎯 Issue #{} was *{}*\n*Title:* {}\n*URL:* {}",
        issue.number, issue.action, issue.title, issue.html_url
    )
}

#[must_use]
pub fn format_event_message(event: &WebhookEvent) -> String {
    match event {
        WebhookEvent::Issue(issue) => format_issue_message(issue),
        WebhookEvent::TestMessage(text) => text.clone(),
        WebhookEvent::Unrecognized => FALLBACK_MESSAGE.to_string(),
    }
}
