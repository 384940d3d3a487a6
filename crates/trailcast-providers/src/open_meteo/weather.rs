// ABOUTME: Open-Meteo forecast API client producing current conditions and a 7-day forecast
// ABOUTME: Decodes WMO weather codes into condition labels on the way in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::{format_coordinate, get_json, normalize_base_url};
use crate::core::WeatherProvider;
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use trailcast_core::constants::limits::FORECAST_DAYS;
use trailcast_core::constants::upstream::{CURRENT_FIELDS, DAILY_FIELDS};
use trailcast_core::errors::provider::ProviderResult;
use trailcast_core::models::{Weather, WeatherForecast, WeatherSnapshot};
use trailcast_intelligence::decode_weather_code;

const PROVIDER_NAME: &str = "Open-Meteo";

/// Stand-in for a `null` wind speed or visibility reading
///
/// Zero wind passes the wind limits; zero visibility fails the visibility
/// minimums, so a station without a visibility sensor never rates as clear.
const MISSING_READING: f64 = 0.0;

/// Forecast API response; only the blocks we request
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    wind_direction_10m: Option<f64>,
    weather_code: i64,
    uv_index: Option<f64>,
    visibility: Option<f64>,
}

/// Column-oriented daily data, one entry per day in `time`
#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<i64>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<f64>,
    #[serde(default)]
    relative_humidity_2m_max: Vec<Option<f64>>,
}

impl From<CurrentBlock> for WeatherSnapshot {
    fn from(current: CurrentBlock) -> Self {
        Self {
            temperature: current.temperature_2m,
            condition: decode_weather_code(current.weather_code).to_owned(),
            wind_speed: current.wind_speed_10m.unwrap_or(MISSING_READING),
            visibility: current.visibility.unwrap_or(MISSING_READING),
            humidity: current.relative_humidity_2m,
            wind_direction: current.wind_direction_10m,
            uv_index: current.uv_index,
        }
    }
}

impl DailyBlock {
    /// Row-oriented forecast, at most [`FORECAST_DAYS`] entries
    ///
    /// Stops at the first day with a missing required column.
    fn into_forecast(self) -> Vec<WeatherForecast> {
        let days = self.time.len().min(FORECAST_DAYS);
        (0..days)
            .map_while(|i| {
                Some(WeatherForecast {
                    date: self.time.get(i)?.clone(),
                    max_temperature: *self.temperature_2m_max.get(i)?,
                    min_temperature: *self.temperature_2m_min.get(i)?,
                    condition: decode_weather_code(*self.weather_code.get(i)?).to_owned(),
                    precipitation_probability: self
                        .precipitation_probability_max
                        .get(i)
                        .copied()
                        .flatten(),
                    wind_speed: *self.wind_speed_10m_max.get(i)?,
                    humidity: self.relative_humidity_2m_max.get(i).copied().flatten(),
                })
            })
            .collect()
    }
}

/// Open-Meteo forecast API client
#[derive(Debug, Clone)]
pub struct OpenMeteoWeatherProvider {
    client: Client,
    base_url: String,
}

impl OpenMeteoWeatherProvider {
    /// Create a provider using the shared HTTP client
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(shared_client().clone(), base_url)
    }

    /// Create a provider with a caller-supplied HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        with_forecast: bool,
    ) -> ProviderResult<ForecastResponse> {
        let url = format!("{}/forecast", self.base_url);
        let latitude = format_coordinate(latitude);
        let longitude = format_coordinate(longitude);
        let forecast_days = FORECAST_DAYS.to_string();

        let mut query = vec![
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("current", CURRENT_FIELDS),
        ];
        if with_forecast {
            query.push(("daily", DAILY_FIELDS));
        }
        query.push(("timezone", "auto"));
        if with_forecast {
            query.push(("forecast_days", forecast_days.as_str()));
        }

        get_json(&self.client, PROVIDER_NAME, &url, &query).await
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoWeatherProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME, api_call = "current_weather"))]
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> ProviderResult<Option<WeatherSnapshot>> {
        let response = self.fetch(latitude, longitude, false).await?;
        Ok(response.current.map(WeatherSnapshot::from))
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME, api_call = "weather"))]
    async fn weather(&self, latitude: f64, longitude: f64) -> ProviderResult<Option<Weather>> {
        let response = self.fetch(latitude, longitude, true).await?;
        let Some(current) = response.current else {
            debug!("Forecast response has no current block");
            return Ok(None);
        };
        let forecast = response
            .daily
            .map(DailyBlock::into_forecast)
            .unwrap_or_default();

        Ok(Some(Weather {
            current: current.into(),
            forecast,
        }))
    }
}
