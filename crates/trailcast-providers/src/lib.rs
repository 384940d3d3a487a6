// ABOUTME: Upstream data providers for current weather, forecasts, and city geocoding
// ABOUTME: Provider traits plus the Open-Meteo implementations and a shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Weather and geocoding providers.
//!
//! Services depend on the [`WeatherProvider`] and [`GeocodingProvider`] traits,
//! never on a concrete implementation, so tests can substitute in-memory fakes.

/// Core provider traits
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Open-Meteo forecast and geocoding APIs
pub mod open_meteo;

pub use core::{GeocodingProvider, WeatherProvider};
pub use http_client::{initialize_shared_client, shared_client};
pub use open_meteo::{OpenMeteoGeocodingProvider, OpenMeteoWeatherProvider};
pub use trailcast_core::errors::provider::{ProviderError, ProviderResult};
