// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates variable precedence, defaults, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use trailcast::config::environment::{Environment, ServerConfig};

const CONFIG_VARS: [&str; 10] = [
    "HTTP_PORT",
    "PORT",
    "ENVIRONMENT",
    "NODE_ENV",
    "HOST",
    "OPENMETEO_BASE_URL",
    "GEOCODING_BASE_URL",
    "UPSTREAM_TIMEOUT_SECS",
    "UPSTREAM_CONNECT_TIMEOUT_SECS",
    "ALLOWED_ORIGINS",
];

fn clear_config_env() {
    for name in CONFIG_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    ); // Default fallback
    assert_eq!(Environment::Production.to_string(), "production");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 4000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.upstream.openmeteo_base_url,
        "https://api.open-meteo.com/v1"
    );
    assert_eq!(
        config.upstream.geocoding_base_url,
        "https://geocoding-api.open-meteo.com/v1"
    );
    assert!(config.cors.allowed_origins.is_empty());
}

#[test]
#[serial]
fn test_port_fallback_and_precedence() {
    clear_config_env();

    env::set_var("PORT", "8080");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 8080);

    env::set_var("HTTP_PORT", "9090");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 9090);

    clear_config_env();
}

#[test]
#[serial]
fn test_node_env_fallback() {
    clear_config_env();

    env::set_var("NODE_ENV", "production");
    assert_eq!(
        ServerConfig::from_env().unwrap().environment,
        Environment::Production
    );

    env::set_var("ENVIRONMENT", "testing");
    assert_eq!(
        ServerConfig::from_env().unwrap().environment,
        Environment::Testing
    );

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_config_env();

    env::set_var("HTTP_PORT", "not-a-port");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("HTTP_PORT"));

    env::set_var("HTTP_PORT", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_upstream_settings_are_rejected() {
    clear_config_env();

    env::set_var("OPENMETEO_BASE_URL", "api.open-meteo.com/v1");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("OPENMETEO_BASE_URL"));
    env::remove_var("OPENMETEO_BASE_URL");

    env::set_var("UPSTREAM_TIMEOUT_SECS", "soon");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}

#[test]
#[serial]
fn test_allowed_origins_and_upstream_overrides() {
    clear_config_env();

    env::set_var(
        "ALLOWED_ORIGINS",
        "https://app.trailcast.dev, https://admin.trailcast.dev",
    );
    env::set_var("GEOCODING_BASE_URL", "http://localhost:8081/v1");
    env::set_var("UPSTREAM_TIMEOUT_SECS", "5");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(
        config.cors.allowed_origins,
        vec!["https://app.trailcast.dev", "https://admin.trailcast.dev"]
    );
    assert_eq!(config.upstream.geocoding_base_url, "http://localhost:8081/v1");
    assert_eq!(config.upstream.timeout_secs, 5);

    clear_config_env();
}
