// ABOUTME: Route module organization for Trailcast HTTP endpoints
// ABOUTME: Groups thin handlers by domain; business rules live in the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Route module for Trailcast
//!
//! Each domain module exposes a `*Routes` type with a `routes()` constructor
//! returning a stateless `Router` that the server merges together.

/// Activity catalog, recommendations, and scores
pub mod activities;
/// City search and nearest-city lookup
pub mod cities;
/// Service information and health check
pub mod health;
/// Weather and forecast
pub mod weather;

pub use activities::ActivityRoutes;
pub use cities::CityRoutes;
pub use health::HealthRoutes;
pub use weather::WeatherRoutes;

use crate::errors::AppError;
use crate::middleware::RequestId;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::Deserialize;

/// `latitude`/`longitude` query parameters shared by location-based endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesQuery {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Unwrap a query extraction, turning a rejection into a JSON invalid input error
pub(crate) fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Stamp an error with the correlation ID of the request that produced it
pub(crate) fn tag_request_id(request_id: &RequestId) -> impl Fn(AppError) -> AppError + '_ {
    move |error| error.with_request_id(request_id.as_str())
}
