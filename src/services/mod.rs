// ABOUTME: Domain service layer between HTTP routes and upstream providers
// ABOUTME: Owns input validation and the failure policy for each operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Domain service layer
//!
//! Services validate input, call providers, and translate provider failures
//! into client-safe [`AppError`]s. Route handlers stay thin.

/// Activity recommendations and single-activity scores
pub mod activities;

/// City search and reverse lookup
pub mod cities;

/// Current weather and forecast
pub mod weather;

pub use activities::{ActivityInfo, ActivityService};
pub use cities::CityService;
pub use weather::WeatherService;

use crate::constants::messages::INVALID_COORDINATES;
use crate::errors::{AppError, AppResult};

/// Valid latitude range in decimal degrees
const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in decimal degrees
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Whether coordinates are finite and within the valid ranges
#[must_use]
pub fn coordinates_are_valid(latitude: f64, longitude: f64) -> bool {
    (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude)
        && (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude)
}

/// Reject coordinates outside the valid ranges
///
/// # Errors
///
/// Returns an invalid input error with "Invalid coordinates provided"
pub fn validate_coordinates(latitude: f64, longitude: f64) -> AppResult<()> {
    if coordinates_are_valid(latitude, longitude) {
        Ok(())
    } else {
        Err(AppError::invalid_input(INVALID_COORDINATES))
    }
}
