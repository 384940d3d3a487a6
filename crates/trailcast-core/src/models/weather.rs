// ABOUTME: Weather data models for current conditions and daily forecasts
// ABOUTME: WeatherSnapshot is the immutable input to activity scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use serde::{Deserialize, Serialize};

/// Current weather readings for one location at one instant
///
/// The scoring engine only reads `temperature`, `condition`, `wind_speed`
/// and `visibility`. Values are passed through from the provider unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Decoded condition label (e.g. "Clear sky"), "Unknown" for unrecognized codes
    pub condition: String,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Visibility in meters
    pub visibility: f64,
    /// Relative humidity percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Wind direction in degrees (0-360, 0 = North)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    /// UV index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<f64>,
}

impl WeatherSnapshot {
    /// Create a snapshot from the four readings used for scoring
    #[must_use]
    pub fn new(
        temperature: f64,
        condition: impl Into<String>,
        wind_speed: f64,
        visibility: f64,
    ) -> Self {
        Self {
            temperature,
            condition: condition.into(),
            wind_speed,
            visibility,
            humidity: None,
            wind_direction: None,
            uv_index: None,
        }
    }
}

/// Daily forecast summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    /// Forecast date (YYYY-MM-DD)
    pub date: String,
    /// Maximum temperature in degrees Celsius
    pub max_temperature: f64,
    /// Minimum temperature in degrees Celsius
    pub min_temperature: f64,
    /// Decoded condition label
    pub condition: String,
    /// Probability of precipitation (0-100)
    pub precipitation_probability: Option<f64>,
    /// Maximum wind speed in km/h
    pub wind_speed: f64,
    /// Maximum relative humidity (0-100)
    pub humidity: Option<f64>,
}

/// Current conditions plus the daily forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Current conditions
    pub current: WeatherSnapshot,
    /// Up to seven days of forecast, starting today
    pub forecast: Vec<WeatherForecast>,
}
