use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("API_KEY", "test-api-key");
    m.insert("API_SECRET", "test-api-secret");
    m.insert("ACCESS_TOKEN", "test-access-token");
    m.insert("ACCESS_SECRET", "test-access-secret");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MYTURN_ENV"));
}

#[test]
fn each_missing_credential_fails_with_its_own_name() {
    for missing in REQUIRED_CREDENTIALS {
        let mut map = full_env();
        map.remove(missing);
        let result = load_app_config_with(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == missing),
            "expected MissingEnvVar({missing}), got: {result:?}"
        );
    }
}

#[test]
fn blank_credential_counts_as_missing() {
    let mut map = full_env();
    map.insert("ACCESS_SECRET", "   ");
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "ACCESS_SECRET"),
        "expected MissingEnvVar(ACCESS_SECRET), got: {result:?}"
    );
}

#[test]
fn missing_credentials_reported_before_invalid_settings() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("MYTURN_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "API_KEY"),
        "expected MissingEnvVar(API_KEY), got: {result:?}"
    );
}

#[test]
fn missing_credential_error_message_names_the_variable() {
    let mut map = full_env();
    map.remove("API_SECRET");
    let err = load_app_config_with(lookup_from_map(&map)).unwrap_err();
    assert_eq!(err.to_string(), "missing required env var API_SECRET");
}

#[test]
fn succeeds_with_all_required_vars() {
    let map = full_env();
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.credentials.api_key, "test-api-key");
    assert_eq!(cfg.credentials.access_secret, "test-access-secret");
    assert_eq!(
        cfg.coordinates_path.to_str(),
        Some("./assets/ca-zip-code-latitude-and-longitude.json")
    );
    assert_eq!(cfg.search_url, DEFAULT_SEARCH_URL);
    assert_eq!(cfg.publish_url, DEFAULT_PUBLISH_URL);
    assert_eq!(cfg.signup_url, "https://myturn.ca.gov/");
    assert_eq!(cfg.vaccine_data, DEFAULT_VACCINE_DATA);
    assert_eq!(cfg.user_agent, "myturn-bot/0.1 (availability-sweep)");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.retry_backoff_base_ms, 500);
    assert_eq!(cfg.max_concurrent_queries, 1);
    assert_eq!(cfg.publish_delay_ms, 1000);
}

#[test]
fn overrides_are_applied() {
    let mut map = full_env();
    map.insert("MYTURN_ENV", "production");
    map.insert("MYTURN_SEARCH_URL", "http://127.0.0.1:9000/search");
    map.insert("MYTURN_COORDINATES_PATH", "/data/points.json");
    map.insert("MYTURN_MAX_RETRIES", "2");
    map.insert("MYTURN_MAX_CONCURRENT_QUERIES", "4");
    map.insert("MYTURN_PUBLISH_DELAY_MS", "0");
    let cfg = load_app_config_with(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.search_url, "http://127.0.0.1:9000/search");
    assert_eq!(cfg.coordinates_path.to_str(), Some("/data/points.json"));
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.max_concurrent_queries, 4);
    assert_eq!(cfg.publish_delay_ms, 0);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("MYTURN_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MYTURN_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MYTURN_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn max_retries_invalid() {
    let mut map = full_env();
    map.insert("MYTURN_MAX_RETRIES", "-1");
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MYTURN_MAX_RETRIES"),
        "expected InvalidEnvVar(MYTURN_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn zero_request_timeout_is_rejected() {
    let mut map = full_env();
    map.insert("MYTURN_REQUEST_TIMEOUT_SECS", "0");
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MYTURN_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MYTURN_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn zero_concurrency_is_rejected() {
    let mut map = full_env();
    map.insert("MYTURN_MAX_CONCURRENT_QUERIES", "0");
    let result = load_app_config_with(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MYTURN_MAX_CONCURRENT_QUERIES"),
        "expected InvalidEnvVar(MYTURN_MAX_CONCURRENT_QUERIES), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_credentials() {
    let map = full_env();
    let cfg = load_app_config_with(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-api-secret"), "got: {rendered}");
    assert!(!rendered.contains("test-access-token"), "got: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
