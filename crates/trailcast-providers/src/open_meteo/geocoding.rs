// ABOUTME: Open-Meteo geocoding API client for city search and reverse lookup
// ABOUTME: Drops country-less results such as continents and regions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::{format_coordinate, get_json, normalize_base_url};
use crate::core::GeocodingProvider;
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use trailcast_core::constants::limits::CITY_SEARCH_COUNT;
use trailcast_core::errors::provider::ProviderResult;
use trailcast_core::models::City;

const PROVIDER_NAME: &str = "Open-Meteo Geocoding";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    id: u64,
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    population: Option<u64>,
    timezone: Option<String>,
}

impl GeocodingResult {
    /// `None` for places without a country (continents, oceans, regions)
    fn into_city(self) -> Option<City> {
        Some(City {
            id: self.id.to_string(),
            name: self.name,
            country: self.country?,
            latitude: self.latitude,
            longitude: self.longitude,
            population: self.population,
            timezone: self.timezone,
        })
    }
}

/// Open-Meteo geocoding API client
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocodingProvider {
    client: Client,
    base_url: String,
}

impl OpenMeteoGeocodingProvider {
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

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoGeocodingProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME, api_call = "search_cities"))]
    async fn search_cities(&self, query: &str) -> ProviderResult<Vec<City>> {
        let count = CITY_SEARCH_COUNT.to_string();
        let params = [
            ("name", query),
            ("count", count.as_str()),
            ("language", "en"),
            ("format", "json"),
        ];
        let response: SearchResponse =
            get_json(&self.client, PROVIDER_NAME, &self.search_url(), &params).await?;

        let total = response.results.len();
        let cities: Vec<City> = response
            .results
            .into_iter()
            .filter_map(GeocodingResult::into_city)
            .collect();

        debug!(total, kept = cities.len(), "City search completed");
        Ok(cities)
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME, api_call = "city_by_coordinates"))]
    async fn city_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> ProviderResult<Option<City>> {
        let latitude = format_coordinate(latitude);
        let longitude = format_coordinate(longitude);
        let params = [
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
        ];
        let response: SearchResponse =
            get_json(&self.client, PROVIDER_NAME, &self.search_url(), &params).await?;

        Ok(response
            .results
            .into_iter()
            .next()
            .and_then(GeocodingResult::into_city))
    }
}
