// ABOUTME: Provider traits for weather and geocoding data sources
// ABOUTME: Services hold these as trait objects so implementations can be swapped in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use async_trait::async_trait;
use trailcast_core::errors::provider::ProviderResult;
use trailcast_core::models::{City, Weather, WeatherSnapshot};

/// Source of current conditions and daily forecasts
///
/// `Ok(None)` means the provider answered but had no data for the location.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Current conditions only
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a malformed payload
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> ProviderResult<Option<WeatherSnapshot>>;

    /// Current conditions plus up to seven days of forecast
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a malformed payload
    async fn weather(&self, latitude: f64, longitude: f64) -> ProviderResult<Option<Weather>>;
}

/// Source of city search and reverse lookup
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Search cities by name
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a malformed payload
    async fn search_cities(&self, query: &str) -> ProviderResult<Vec<City>>;

    /// City closest to the given coordinates, if any
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a malformed payload
    async fn city_by_coordinates(&self, latitude: f64, longitude: f64)
        -> ProviderResult<Option<City>>;
}
