// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads server, upstream, and CORS settings from environment variables and validates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Environment-based configuration management for production deployment

use crate::constants::limits::DEFAULT_HTTP_PORT;
use crate::constants::upstream::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_GEOCODING_BASE_URL, DEFAULT_OPENMETEO_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Default bind address
const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment type for CORS and logging behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Lowercase name as reported by the health endpoint
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream provider endpoints and HTTP client timeouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Open-Meteo forecast API base URL
    pub openmeteo_base_url: String,
    /// Open-Meteo geocoding API base URL
    pub geocoding_base_url: String,
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            openmeteo_base_url: DEFAULT_OPENMETEO_BASE_URL.to_owned(),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins, only enforced in production
    pub allowed_origins: Vec<String>,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Upstream provider settings
    pub upstream: UpstreamConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            upstream: UpstreamConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port,
            environment,
            upstream: UpstreamConfig {
                openmeteo_base_url: env_var_or("OPENMETEO_BASE_URL", DEFAULT_OPENMETEO_BASE_URL),
                geocoding_base_url: env_var_or("GEOCODING_BASE_URL", DEFAULT_GEOCODING_BASE_URL),
                timeout_secs: env_var_or(
                    "UPSTREAM_TIMEOUT_SECS",
                    &DEFAULT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    "UPSTREAM_CONNECT_TIMEOUT_SECS",
                    &DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid UPSTREAM_CONNECT_TIMEOUT_SECS value")?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or("ALLOWED_ORIGINS", "")),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error on a zero port, a zero timeout, or a non-HTTP base URL
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }

        if self.upstream.timeout_secs == 0 || self.upstream.connect_timeout_secs == 0 {
            return Err(anyhow::anyhow!("Upstream timeouts must be non-zero"));
        }

        for (name, url) in [
            ("OPENMETEO_BASE_URL", &self.upstream.openmeteo_base_url),
            ("GEOCODING_BASE_URL", &self.upstream.geocoding_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "{name} must start with http:// or https://, got '{url}'"
                ));
            }
        }

        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trailcast Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Open-Meteo: {}\n\
             - Geocoding: {}\n\
             - Upstream Timeout: {}s (connect {}s)\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.upstream.openmeteo_base_url,
            self.upstream.geocoding_base_url,
            self.upstream.timeout_secs,
            self.upstream.connect_timeout_secs,
            if self.environment.is_production() {
                if self.cors.allowed_origins.is_empty() {
                    "none".to_owned()
                } else {
                    self.cors.allowed_origins.join(", ")
                }
            } else {
                "any".to_owned()
            }
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
