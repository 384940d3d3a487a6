// ABOUTME: City search and nearest-city lookup on top of a geocoding provider
// ABOUTME: Search failures surface as errors; reverse lookup failures degrade to no result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::validate_coordinates;
use crate::constants::limits::MIN_CITY_QUERY_LENGTH;
use crate::constants::messages::{CITY_SEARCH_FAILED, QUERY_TOO_SHORT};
use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::providers::GeocodingProvider;
use std::sync::Arc;
use tracing::{error, warn};

/// City lookups
#[derive(Clone)]
pub struct CityService {
    provider: Arc<dyn GeocodingProvider>,
}

impl CityService {
    /// Create a service backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn GeocodingProvider>) -> Self {
        Self { provider }
    }

    /// Search cities by name
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the trimmed query is shorter than two
    /// characters, or an external service error if the provider fails
    pub async fn search(&self, query: &str) -> AppResult<Vec<City>> {
        let query = query.trim();
        if query.chars().count() < MIN_CITY_QUERY_LENGTH {
            return Err(AppError::invalid_input(QUERY_TOO_SHORT));
        }

        self.provider.search_cities(query).await.map_err(|e| {
            error!(provider = e.provider(), error = %e, "City search failed");
            e.into_app_error(CITY_SEARCH_FAILED)
        })
    }

    /// City closest to the given coordinates
    ///
    /// Provider failures are logged and reported as no result.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the coordinates are out of range
    pub async fn nearest(&self, latitude: f64, longitude: f64) -> AppResult<Option<City>> {
        validate_coordinates(latitude, longitude)?;

        match self.provider.city_by_coordinates(latitude, longitude).await {
            Ok(city) => Ok(city),
            Err(e) => {
                warn!(provider = e.provider(), error = %e, "Reverse city lookup failed");
                Ok(None)
            }
        }
    }
}
