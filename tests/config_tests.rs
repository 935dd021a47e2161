use issue_relay::core::config::{RelayConfig, SLACK_URL_VAR};
use issue_relay::errors::RelayError;

fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| {
        assert_eq!(key, SLACK_URL_VAR);
        value.map(ToString::to_string)
    }
}

#[test]
fn test_config_reads_slack_url() {
    let config =
        RelayConfig::from_lookup(lookup(Some("https://hooks.slack.com/services/T0/B0/X"))).unwrap();
    assert_eq!(config.slack_url, "https://hooks.slack.com/services/T0/B0/X");
}

#[test]
fn test_config_missing_slack_url() {
    let err = RelayConfig::from_lookup(lookup(None)).unwrap_err();
    assert!(matches!(err, RelayError::MissingConfig(_)));
    assert_eq!(err.to_string(), "SLACK_URL not configured");
}

#[test]
fn test_config_empty_slack_url_counts_as_missing() {
    let err = RelayConfig::from_lookup(lookup(Some(""))).unwrap_err();
    assert!(matches!(err, RelayError::MissingConfig(_)));
}

#[test]
fn test_config_rejects_relative_url() {
    let err = RelayConfig::from_lookup(lookup(Some("hooks.slack.com/services"))).unwrap_err();
    assert!(matches!(err, RelayError::InvalidConfig(_)));
}

#[test]
fn test_config_from_env() {
    temp_env::with_var(SLACK_URL_VAR, Some("http://localhost:9999/hook"), || {
        let config = RelayConfig::from_env().unwrap();
        assert_eq!(config.slack_url, "http://localhost:9999/hook");
    });

    temp_env::with_var_unset(SLACK_URL_VAR, || {
        assert!(RelayConfig::from_env().is_err());
    });
}
