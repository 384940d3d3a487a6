// ABOUTME: Open-Meteo provider implementations for forecasts and geocoding
// ABOUTME: Shared request helper mapping transport, status, and decode failures to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

mod geocoding;
mod weather;

pub use geocoding::OpenMeteoGeocodingProvider;
pub use weather::OpenMeteoWeatherProvider;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use trailcast_core::errors::provider::{ProviderError, ProviderResult};

/// Format a coordinate the way Open-Meteo examples do (4 decimal places, ~11 m)
pub(crate) fn format_coordinate(value: f64) -> String {
    format!("{value:.4}")
}

/// Strip trailing slashes so `{base}/path` never doubles them
pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> String {
    let mut base_url = base_url.into();
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

/// Send a GET request and decode the JSON body
pub(crate) async fn get_json<Q, T>(
    client: &Client,
    provider: &'static str,
    url: &str,
    query: &Q,
) -> ProviderResult<T>
where
    Q: Serialize + ?Sized + Sync,
    T: DeserializeOwned,
{
    tracing::debug!(provider, url, "Sending upstream request");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| ProviderError::Network { provider, source })?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_owned());
        return Err(ProviderError::ApiError {
            provider,
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| ProviderError::Network { provider, source })?;

    serde_json::from_slice(&body).map_err(|e| ProviderError::Parse {
        provider,
        message: e.to_string(),
    })
}
