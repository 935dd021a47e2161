use serde::Serialize;

/// The recognized shapes of an inbound webhook body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    Issue(IssueEvent),
    TestMessage(String),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueEvent {
    pub action: String,
    pub number: i64,
    pub title: String,
    pub html_url: String,
}

/// Body of a Slack incoming-webhook POST.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlackNotification {
    pub text: String,
}

impl SlackNotification {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
