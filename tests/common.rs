// ABOUTME: Shared test utilities and in-memory providers for integration tests
// ABOUTME: Provides scripted weather and geocoding providers plus resource setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `trailcast`

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use trailcast::config::environment::ServerConfig;
use trailcast::models::{City, Weather, WeatherForecast, WeatherSnapshot};
use trailcast::providers::{GeocodingProvider, ProviderError, ProviderResult, WeatherProvider};
use trailcast::resources::{ServerResources, ServerResourcesBuilder};

/// What a scripted provider answers with
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    /// Successful answer
    Data(T),
    /// Provider answered without data
    Absent,
    /// Provider failed with a non-success status
    Fail,
}

fn upstream_failure(provider: &'static str) -> ProviderError {
    ProviderError::ApiError {
        provider,
        status: 503,
        message: "Service Unavailable".to_owned(),
    }
}

/// Weather provider returning a fixed answer and counting calls
pub struct ScriptedWeatherProvider {
    answer: Scripted<Weather>,
    calls: AtomicUsize,
}

impl ScriptedWeatherProvider {
    pub fn new(answer: Scripted<Weather>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    /// Current conditions only, empty forecast
    pub fn with_current(snapshot: WeatherSnapshot) -> Arc<Self> {
        Self::new(Scripted::Data(Weather {
            current: snapshot,
            forecast: Vec::new(),
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> ProviderResult<Option<Weather>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Scripted::Data(weather) => Ok(Some(weather.clone())),
            Scripted::Absent => Ok(None),
            Scripted::Fail => Err(upstream_failure("scripted-weather")),
        }
    }
}

#[async_trait]
impl WeatherProvider for ScriptedWeatherProvider {
    fn name(&self) -> &'static str {
        "scripted-weather"
    }

    async fn current_weather(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> ProviderResult<Option<WeatherSnapshot>> {
        Ok(self.answer()?.map(|weather| weather.current))
    }

    async fn weather(&self, _latitude: f64, _longitude: f64) -> ProviderResult<Option<Weather>> {
        self.answer()
    }
}

/// Geocoding provider returning fixed answers and counting calls
pub struct ScriptedGeocodingProvider {
    search: Scripted<Vec<City>>,
    nearest: Scripted<City>,
    calls: AtomicUsize,
}

impl ScriptedGeocodingProvider {
    pub fn new(search: Scripted<Vec<City>>, nearest: Scripted<City>) -> Arc<Self> {
        Arc::new(Self {
            search,
            nearest,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Scripted::Fail, Scripted::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodingProvider for ScriptedGeocodingProvider {
    fn name(&self) -> &'static str {
        "scripted-geocoding"
    }

    async fn search_cities(&self, _query: &str) -> ProviderResult<Vec<City>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.search {
            Scripted::Data(cities) => Ok(cities.clone()),
            Scripted::Absent => Ok(Vec::new()),
            Scripted::Fail => Err(upstream_failure("scripted-geocoding")),
        }
    }

    async fn city_by_coordinates(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> ProviderResult<Option<City>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.nearest {
            Scripted::Data(city) => Ok(Some(city.clone())),
            Scripted::Absent => Ok(None),
            Scripted::Fail => Err(upstream_failure("scripted-geocoding")),
        }
    }
}

pub fn london() -> City {
    City {
        id: "2643743".to_owned(),
        name: "London".to_owned(),
        country: "United Kingdom".to_owned(),
        latitude: 51.508_53,
        longitude: -0.125_74,
        population: Some(7_556_900),
        timezone: Some("Europe/London".to_owned()),
    }
}

pub fn clear_summer_day() -> WeatherSnapshot {
    WeatherSnapshot::new(25.0, "Clear sky", 15.0, 10_000.0)
}

pub fn heavy_rain() -> WeatherSnapshot {
    WeatherSnapshot::new(2.0, "Heavy rain", 30.0, 1000.0)
}

pub fn week_forecast() -> Vec<WeatherForecast> {
    (1..=7)
        .map(|day| WeatherForecast {
            date: format!("2025-06-{day:02}"),
            max_temperature: 24.0,
            min_temperature: 14.0,
            condition: "Partly cloudy".to_owned(),
            precipitation_probability: Some(10.0),
            wind_speed: 12.0,
            humidity: None,
        })
        .collect()
}

/// Server resources wired to the given providers with default configuration
pub fn resources_with(
    weather: Arc<dyn WeatherProvider>,
    geocoding: Arc<dyn GeocodingProvider>,
) -> Arc<ServerResources> {
    Arc::new(
        ServerResourcesBuilder::new()
            .with_config(Arc::new(ServerConfig::default()))
            .with_weather_provider(weather)
            .with_geocoding_provider(geocoding)
            .build(),
    )
}
