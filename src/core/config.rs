use std::env;

use url::Url;

use crate::errors::RelayError;

/// Environment variable holding the Slack incoming-webhook URL.
pub const SLACK_URL_VAR: &str = "SLACK_URL";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub slack_url: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack_url = lookup(SLACK_URL_VAR)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RelayError::MissingConfig(SLACK_URL_VAR.to_string()))?;

        Url::parse(&slack_url).map_err(|_| RelayError::InvalidConfig(SLACK_URL_VAR.to_string()))?;

        Ok(Self { slack_url })
    }
}
