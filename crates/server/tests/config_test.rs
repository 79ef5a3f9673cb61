//! # Configuration Tests
//!
//! This file contains tests for the configuration loading logic: reading
//! `AppConfig` from environment variables, the lenient probability-floor
//! resolution, and the resolved accessors.

use std::env;
use std::sync::Mutex;
use vistag_server::config::{get_config, resolve_min_probability, AppConfig, DEFAULT_MIN_PROBABILITY};

// A mutex to ensure that tests modifying the environment run sequentially.
// Environment variables are a shared, global resource, and the default
// parallel test execution would let them interfere.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A helper function to clear all environment variables used by `get_config`.
fn clear_env_vars() {
    env::remove_var("PORT");
    env::remove_var("CV_ENDPOINT");
    env::remove_var("CV_KEY");
    env::remove_var("CV_MIN_PROBABILITY");
    env::remove_var("CP_ENDPOINT");
    env::remove_var("CP_PREDICTION_KEY");
    env::remove_var("CP_MIN_PROBABILITY");
}

#[test]
fn test_get_config_defaults() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let config = get_config().expect("get_config failed");

    assert_eq!(config.port, 9090);
    assert!(config.cv_endpoint.is_none());
    assert!(config.cp_prediction_key.is_none());
    assert_eq!(config.cv_floor(), DEFAULT_MIN_PROBABILITY);
    assert_eq!(config.cp_floor(), DEFAULT_MIN_PROBABILITY);
}

#[test]
fn test_get_config_reads_environment() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    env::set_var("PORT", "9999");
    env::set_var("CV_ENDPOINT", "https://vision.example.com");
    env::set_var("CV_KEY", "test-cv-key");
    env::set_var("CV_MIN_PROBABILITY", "0.7");
    env::set_var("CP_ENDPOINT", "https://classifier.example.com/classify");
    env::set_var("CP_PREDICTION_KEY", "test-prediction-key");
    env::set_var("CP_MIN_PROBABILITY", "0.75");

    let config = get_config().expect("get_config failed");
    clear_env_vars();

    assert_eq!(config.port, 9999);
    assert_eq!(config.cv_endpoint.as_deref(), Some("https://vision.example.com"));
    assert_eq!(config.cv_key.as_deref(), Some("test-cv-key"));
    assert_eq!(config.cv_floor(), 0.7);
    assert_eq!(
        config.cp_endpoint.as_deref(),
        Some("https://classifier.example.com/classify")
    );
    assert_eq!(config.cp_prediction_key.as_deref(), Some("test-prediction-key"));
    assert_eq!(config.cp_floor(), 0.75);
}

#[test]
fn test_absent_floor_uses_default() {
    assert_eq!(resolve_min_probability(None), DEFAULT_MIN_PROBABILITY);
}

#[test]
fn test_numeric_floor_is_honored() {
    assert_eq!(resolve_min_probability(Some("0.8")), 0.8);
    assert_eq!(resolve_min_probability(Some(" 0.7 ")), 0.7);
}

#[test]
fn test_unparsable_floor_uses_default() {
    assert_eq!(
        resolve_min_probability(Some("not-a-number")),
        DEFAULT_MIN_PROBABILITY
    );
    assert_eq!(resolve_min_probability(Some("")), DEFAULT_MIN_PROBABILITY);
}

#[test]
fn test_non_finite_floor_uses_default() {
    assert_eq!(resolve_min_probability(Some("NaN")), DEFAULT_MIN_PROBABILITY);
    assert_eq!(resolve_min_probability(Some("inf")), DEFAULT_MIN_PROBABILITY);
}

#[test]
fn test_zero_and_negative_floors_are_accepted() {
    // Unlike the default fallback, an explicit 0 (or below) is a deliberate
    // "include everything" setting and is honored as-is.
    assert_eq!(resolve_min_probability(Some("0")), 0.0);
    assert_eq!(resolve_min_probability(Some("-1")), -1.0);
}

#[test]
fn test_config_floor_accessors() {
    let config = AppConfig {
        port: 0,
        cv_endpoint: None,
        cv_key: None,
        cv_min_probability: Some("0.9".to_string()),
        cp_endpoint: None,
        cp_prediction_key: None,
        cp_min_probability: None,
    };

    assert_eq!(config.cv_floor(), 0.9);
    assert_eq!(config.cp_floor(), DEFAULT_MIN_PROBABILITY);
}
