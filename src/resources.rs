// ABOUTME: Centralized resource container shared by all HTTP handlers
// ABOUTME: Holds configuration and the provider-backed services behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! # Server Resources
//!
//! Built once at startup and handed to every route group as axum state.
//! Providers default to Open-Meteo; tests inject their own through the builder.

use crate::config::environment::ServerConfig;
use crate::providers::{
    GeocodingProvider, OpenMeteoGeocodingProvider, OpenMeteoWeatherProvider, WeatherProvider,
};
use crate::services::{ActivityService, CityService, WeatherService};
use std::sync::Arc;

/// Shared server state
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// City search and reverse lookup
    pub cities: CityService,
    /// Weather and forecast
    pub weather: WeatherService,
    /// Activity recommendations and scores
    pub activities: ActivityService,
}

impl ServerResources {
    /// Create resources backed by the Open-Meteo providers named in the configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        ServerResourcesBuilder::new().with_config(config).build()
    }

    /// Create resources from explicit providers
    #[must_use]
    pub fn with_providers(
        config: Arc<ServerConfig>,
        weather_provider: Arc<dyn WeatherProvider>,
        geocoding_provider: Arc<dyn GeocodingProvider>,
    ) -> Self {
        Self {
            config,
            cities: CityService::new(geocoding_provider),
            weather: WeatherService::new(Arc::clone(&weather_provider)),
            activities: ActivityService::new(weather_provider),
        }
    }
}

/// Builder for [`ServerResources`]
#[derive(Default)]
pub struct ServerResourcesBuilder {
    config: Option<Arc<ServerConfig>>,
    weather_provider: Option<Arc<dyn WeatherProvider>>,
    geocoding_provider: Option<Arc<dyn GeocodingProvider>>,
}

impl ServerResourcesBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server configuration
    #[must_use]
    pub fn with_config(mut self, config: Arc<ServerConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the weather provider
    #[must_use]
    pub fn with_weather_provider(mut self, provider: Arc<dyn WeatherProvider>) -> Self {
        self.weather_provider = Some(provider);
        self
    }

    /// Set the geocoding provider
    #[must_use]
    pub fn with_geocoding_provider(mut self, provider: Arc<dyn GeocodingProvider>) -> Self {
        self.geocoding_provider = Some(provider);
        self
    }

    /// Build the `ServerResources`, filling gaps with defaults
    #[must_use]
    pub fn build(self) -> ServerResources {
        let config = self.config.unwrap_or_default();
        let weather_provider = self.weather_provider.unwrap_or_else(|| {
            Arc::new(OpenMeteoWeatherProvider::new(
                config.upstream.openmeteo_base_url.as_str(),
            ))
        });
        let geocoding_provider = self.geocoding_provider.unwrap_or_else(|| {
            Arc::new(OpenMeteoGeocodingProvider::new(
                config.upstream.geocoding_base_url.as_str(),
            ))
        });

        ServerResources::with_providers(config, weather_provider, geocoding_provider)
    }
}
