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
    m.insert("PLAYBACK_API_BASE_URL", "http://localhost:8000");
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
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PLAYBACK_ENV"));
}

#[test]
fn build_app_config_fails_without_api_base_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PLAYBACK_API_BASE_URL"),
        "expected MissingEnvVar(PLAYBACK_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_base_url_as_missing() {
    let mut map = HashMap::new();
    map.insert("PLAYBACK_API_BASE_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "playback-dashboard/0.1");
    assert_eq!(cfg.result_limit, 100);
    assert_eq!(cfg.default_window_days, 30);
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = full_env();
    map.insert("PLAYBACK_ENV", "production");
    map.insert("PLAYBACK_LOG_LEVEL", "debug");
    map.insert("PLAYBACK_REQUEST_TIMEOUT_SECS", "5");
    map.insert("PLAYBACK_USER_AGENT", "custom-agent/2.0");
    map.insert("PLAYBACK_RESULT_LIMIT", "250");
    map.insert("PLAYBACK_DEFAULT_WINDOW_DAYS", "7");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.result_limit, 250);
    assert_eq!(cfg.default_window_days, 7);
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("PLAYBACK_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLAYBACK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLAYBACK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = full_env();
    map.insert("PLAYBACK_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLAYBACK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLAYBACK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_result_limit() {
    let mut map = full_env();
    map.insert("PLAYBACK_RESULT_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLAYBACK_RESULT_LIMIT"),
        "expected InvalidEnvVar(PLAYBACK_RESULT_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_negative_window_days() {
    let mut map = full_env();
    map.insert("PLAYBACK_DEFAULT_WINDOW_DAYS", "-30");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLAYBACK_DEFAULT_WINDOW_DAYS"),
        "expected InvalidEnvVar(PLAYBACK_DEFAULT_WINDOW_DAYS), got: {result:?}"
    );
}
