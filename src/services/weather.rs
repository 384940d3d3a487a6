// ABOUTME: Weather lookups on top of a weather provider
// ABOUTME: Validates coordinates and replaces provider errors with a fixed client message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::validate_coordinates;
use crate::constants::messages::WEATHER_FETCH_FAILED;
use crate::errors::AppResult;
use crate::models::Weather;
use crate::providers::WeatherProvider;
use std::sync::Arc;
use tracing::error;

/// Current weather and forecast lookups
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    /// Create a service backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Current conditions and seven-day forecast, `None` if the provider has no data
    ///
    /// # Errors
    ///
    /// Returns an invalid input error for out-of-range coordinates, or an
    /// external service error if the provider fails
    pub async fn weather(&self, latitude: f64, longitude: f64) -> AppResult<Option<Weather>> {
        validate_coordinates(latitude, longitude)?;

        self.provider.weather(latitude, longitude).await.map_err(|e| {
            error!(provider = e.provider(), error = %e, "Weather fetch failed");
            e.into_app_error(WEATHER_FETCH_FAILED)
        })
    }
}
