//! API Gateway proxy response builders.
//!
//! Every response carries a JSON body and a `Content-Type: application/json`
//! header.

use serde_json::{Value, json};

/// Success message returned once the notification has been delivered.
pub const PROCESSED_MESSAGE: &str = "Webhook processed successfully";

/// Wraps a JSON body in an API Gateway proxy response.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response echoing the text sent to Slack.
#[must_use]
pub fn ok_processed(slack_message: &str) -> Value {
    json_response(
        200,
        &json!({ "message": PROCESSED_MESSAGE, "slackMessage": slack_message }),
    )
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Returns a 502 response for a notification Slack did not accept.
#[must_use]
pub fn delivery_failed(slack_message: &str) -> Value {
    json_response(
        502,
        &json!({
            "error": "Failed to deliver Slack notification",
            "slackMessage": slack_message
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(resp: &Value) -> Value {
        serde_json::from_str(resp["body"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn err_response_shape() {
        let resp = err_response(500, "SLACK_URL not configured");
        assert_eq!(resp["statusCode"], 500);
        assert_eq!(resp["headers"]["Content-Type"], "application/json");
        assert_eq!(body_of(&resp), json!({"error": "SLACK_URL not configured"}));
    }

    #[test]
    fn ok_processed_echoes_message() {
        let resp = ok_processed("hello");
        assert_eq!(resp["statusCode"], 200);
        assert_eq!(
            body_of(&resp),
            json!({"message": "Webhook processed successfully", "slackMessage": "hello"})
        );
    }
}
