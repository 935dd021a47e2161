use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::core::models::{IssueEvent, WebhookEvent};
use crate::errors::RelayError;
use crate::slack::message_formatter::{FALLBACK_MESSAGE, PARSE_ERROR_MESSAGE, format_event_message};

/// Derives the Slack text for an API Gateway proxy event. Never fails:
/// unreadable bodies are logged and replaced with [`PARSE_ERROR_MESSAGE`],
/// missing or empty ones with [`FALLBACK_MESSAGE`].
#[must_use]
pub fn derive_message(payload: &Value) -> String {
    let event = extract_body(payload).and_then(|body| {
        log_body(body.as_deref());
        match body.as_deref() {
            None | Some("") => Ok(None),
            Some(body) => parse_webhook_event(body).map(Some),
        }
    });

    match event {
        Ok(None) => FALLBACK_MESSAGE.to_string(),
        Ok(Some(event)) => {
            if let WebhookEvent::Issue(issue) = &event {
                info!(
                    action = %issue.action,
                    issue_number = issue.number,
                    "GitHub issue event: {} - {}",
                    issue.action,
                    issue.title
                );
            }
            format_event_message(&event)
        }
        Err(e) => {
            error!("Error parsing webhook: {}", e);
            PARSE_ERROR_MESSAGE.to_string()
        }
    }
}

fn log_body(body: Option<&str>) {
    #[cfg(feature = "debug-logs")]
    info!("Webhook body: {:?}", body);

    #[cfg(not(feature = "debug-logs"))]
    info!("Webhook body length: {}", body.map_or(0, str::len));
}

/// Pulls the raw body out of an API Gateway proxy event.
///
/// Returns `Ok(None)` when the body is absent or null. Bodies flagged with
/// `isBase64Encoded` are decoded as UTF-8 text.
pub fn extract_body(payload: &Value) -> Result<Option<String>, RelayError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(RelayError::ParseError(
                "request body is not a string".to_string(),
            ));
        }
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(Some(body.clone()));
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| RelayError::ParseError(format!("body is not valid UTF-8: {}", e)))
}

/// Parses a webhook body into one of the recognized event shapes.
///
/// An object carrying both `action` and `issue` keys is an issue event; one
/// carrying `message` is a test message; any other object is unrecognized.
/// Non-object roots and mistyped fields are errors.
pub fn parse_webhook_event(body: &str) -> Result<WebhookEvent, RelayError> {
    let root: Value = serde_json::from_str(body)?;
    let Some(obj) = root.as_object() else {
        return Err(RelayError::ParseError(
            "webhook body is not a JSON object".to_string(),
        ));
    };

    if let (Some(action), Some(issue)) = (obj.get("action"), obj.get("issue")) {
        return parse_issue_event(action, issue).map(WebhookEvent::Issue);
    }

    if let Some(message) = obj.get("message") {
        let text = nullable_str(message, "message")?.unwrap_or("Test message");
        return Ok(WebhookEvent::TestMessage(text.to_string()));
    }

    Ok(WebhookEvent::Unrecognized)
}

fn parse_issue_event(action: &Value, issue: &Value) -> Result<IssueEvent, RelayError> {
    let issue = issue
        .as_object()
        .ok_or_else(|| RelayError::ParseError("`issue` is not an object".to_string()))?;

    let action = nullable_str(action, "action")?.unwrap_or("unknown");
    let title = nullable_str(required(issue, "title")?, "issue.title")?.unwrap_or("No title");
    let html_url = nullable_str(required(issue, "html_url")?, "issue.html_url")?.unwrap_or("");
    let number = required(issue, "number")?.as_i64().ok_or_else(|| {
        RelayError::ParseError("`issue.number` is not an integer".to_string())
    })?;

    Ok(IssueEvent {
        action: action.to_string(),
        number,
        title: title.to_string(),
        html_url: html_url.to_string(),
    })
}

fn required<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value, RelayError> {
    obj.get(key)
        .ok_or_else(|| RelayError::ParseError(format!("missing `issue.{}`", key)))
}

fn nullable_str<'a>(value: &'a Value, field: &str) -> Result<Option<&'a str>, RelayError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(RelayError::ParseError(format!(
            "`{}` is not a string",
            field
        ))),
    }
}
