// ABOUTME: Error types for upstream weather and geocoding provider calls
// ABOUTME: Separates transport, HTTP status, and payload parsing failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! # Provider Error Types
//!
//! Structured errors for calls to external data providers. They never reach
//! API clients directly: services log them and convert them to an
//! [`AppError`](super::AppError) with a fixed, client-safe message.

use super::{AppError, ErrorCode};

/// Errors raised while talking to an upstream provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Request could not be sent or the connection failed (includes timeouts)
    #[error("{provider} request failed: {source}")]
    Network {
        /// Provider name
        provider: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status
    #[error("{provider} returned status {status}: {message}")]
    ApiError {
        /// Provider name
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Provider payload did not match the expected shape
    #[error("{provider} response could not be parsed: {message}")]
    Parse {
        /// Provider name
        provider: &'static str,
        /// Parser message
        message: String,
    },
}

impl ProviderError {
    /// Name of the provider that failed
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Parse { provider, .. } => provider,
        }
    }

    /// Client-facing error with a fixed message
    ///
    /// Transport failures (connection refused, timeouts) map to
    /// `EXTERNAL_SERVICE_UNAVAILABLE` (503); upstream error statuses and
    /// unparseable payloads map to `EXTERNAL_SERVICE_ERROR` (502). The
    /// provider error is kept as the source for logging.
    #[must_use]
    pub fn into_app_error(self, message: impl Into<String>) -> AppError {
        let code = match &self {
            Self::Network { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::ApiError { .. } | Self::Parse { .. } => ErrorCode::ExternalServiceError,
        };
        AppError::new(code, message).with_source(self)
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
