// ABOUTME: Application-wide constants for upstream services, limits, and messages
// ABOUTME: Single place for Open-Meteo defaults and fixed user-facing error text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Constants grouped by domain

/// Service identity used in logs and the root endpoint
pub mod service {
    /// Service name for structured logging
    pub const SERVICE_NAME: &str = "trailcast";
    /// Human-readable API name
    pub const API_NAME: &str = "Trailcast Travel Planning API";
}

/// Upstream Open-Meteo endpoints
pub mod upstream {
    /// Default Open-Meteo forecast API base URL
    pub const DEFAULT_OPENMETEO_BASE_URL: &str = "https://api.open-meteo.com/v1";
    /// Default Open-Meteo geocoding API base URL
    pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";
    /// Default request timeout for upstream calls in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
    /// Default connect timeout for upstream calls in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;
    /// Current-conditions variables requested from the forecast API
    pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,wind_direction_10m,weather_code,uv_index,visibility";
    /// Daily variables requested from the forecast API
    pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max,wind_speed_10m_max,relative_humidity_2m_max";
}

/// Request and response limits
pub mod limits {
    /// Number of forecast days requested and returned
    pub const FORECAST_DAYS: usize = 7;
    /// Maximum number of cities returned by a search
    pub const CITY_SEARCH_COUNT: u32 = 10;
    /// Minimum trimmed length of a city search query
    pub const MIN_CITY_QUERY_LENGTH: usize = 2;
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 4000;
}

/// Fixed user-facing error messages
pub mod messages {
    /// Aggregate recommendation path failure
    pub const RECOMMENDATIONS_FAILED: &str =
        "Failed to get activity recommendations. Please try again later.";
    /// City search failure
    pub const CITY_SEARCH_FAILED: &str = "Failed to search cities. Please try again later.";
    /// Weather fetch failure
    pub const WEATHER_FETCH_FAILED: &str = "Failed to fetch weather data. Please try again later.";
    /// Coordinates outside the valid range
    pub const INVALID_COORDINATES: &str = "Invalid coordinates provided";
    /// City search query too short
    pub const QUERY_TOO_SHORT: &str = "Query must be at least 2 characters long";
}
