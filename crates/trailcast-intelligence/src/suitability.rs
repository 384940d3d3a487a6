// ABOUTME: Boolean suitability rules for skiing, surfing, and sightseeing
// ABOUTME: Each rule reads temperature, wind, visibility, and condition keyword traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Suitability predicates
//!
//! Four independent judgments of whether current weather favors an activity.
//! Indoor sightseeing is the complement of outdoor sightseeing rather than a
//! rule of its own.

use crate::conditions::ConditionTraits;
use trailcast_core::models::WeatherSnapshot;

/// Skiing requires freezing temperatures (°C)
pub const SKIING_MAX_TEMPERATURE: f64 = 0.0;
/// Maximum wind for skiing (km/h)
pub const SKIING_MAX_WIND: f64 = 30.0;
/// Minimum temperature for surfing (°C)
pub const SURFING_MIN_TEMPERATURE: f64 = 15.0;
/// Maximum wind for surfing (km/h)
pub const SURFING_MAX_WIND: f64 = 25.0;
/// Comfortable sightseeing temperature range (°C)
pub const SIGHTSEEING_TEMPERATURE_RANGE: (f64, f64) = (5.0, 30.0);
/// Maximum wind for outdoor sightseeing (km/h)
pub const SIGHTSEEING_MAX_WIND: f64 = 40.0;
/// Minimum visibility for outdoor sightseeing (m)
pub const SIGHTSEEING_MIN_VISIBILITY: f64 = 5000.0;
/// Visibility substituted when judging indoor sightseeing (m)
pub const INDOOR_REFERENCE_VISIBILITY: f64 = 10_000.0;

/// Readings the suitability rules and scorer work from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Visibility in meters
    pub visibility: f64,
    /// Keywords present in the condition label
    pub traits: ConditionTraits,
}

impl Conditions {
    /// Build from raw readings and a condition label
    #[must_use]
    pub fn new(temperature: f64, condition: &str, wind_speed: f64, visibility: f64) -> Self {
        Self {
            temperature,
            wind_speed,
            visibility,
            traits: ConditionTraits::from_label(condition),
        }
    }

    /// Cold, calm enough, and either snowing or clear
    #[must_use]
    pub fn is_good_skiing(&self) -> bool {
        self.temperature <= SKIING_MAX_TEMPERATURE
            && self.wind_speed <= SKIING_MAX_WIND
            && (self.traits.is_snowy() || self.traits.is_fair())
    }

    /// Warm, moderate wind, and dry
    #[must_use]
    pub fn is_good_surfing(&self) -> bool {
        self.temperature >= SURFING_MIN_TEMPERATURE
            && self.wind_speed <= SURFING_MAX_WIND
            && !self.traits.is_wet()
    }

    /// Comfortable temperature, not too windy, good visibility, and dry
    #[must_use]
    pub fn is_good_outdoor_sightseeing(&self) -> bool {
        let (min, max) = SIGHTSEEING_TEMPERATURE_RANGE;
        (min..=max).contains(&self.temperature)
            && self.wind_speed <= SIGHTSEEING_MAX_WIND
            && self.visibility >= SIGHTSEEING_MIN_VISIBILITY
            && !self.traits.is_wet()
    }

    /// Outdoor conditions are poor, judged without the real visibility
    #[must_use]
    pub fn is_good_indoor_sightseeing(&self) -> bool {
        let outdoor = Self {
            visibility: INDOOR_REFERENCE_VISIBILITY,
            ..*self
        };
        !outdoor.is_good_outdoor_sightseeing()
    }
}

impl From<&WeatherSnapshot> for Conditions {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        Self::new(
            snapshot.temperature,
            &snapshot.condition,
            snapshot.wind_speed,
            snapshot.visibility,
        )
    }
}
