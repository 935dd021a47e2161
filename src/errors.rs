use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0} not configured")]
    MissingConfig(String),

    #[error("{0} is not a valid URL")]
    InvalidConfig(String),

    #[error("Failed to parse webhook payload: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Slack rejected notification with status {status}: {body}")]
    DeliveryError { status: u16, body: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for RelayError {
    fn from(error: base64::DecodeError) -> Self {
        RelayError::ParseError(format!("invalid base64 body: {}", error))
    }
}
