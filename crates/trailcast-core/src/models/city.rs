// ABOUTME: City model returned by geocoding searches
// ABOUTME: Carries coordinates used for weather lookups and activity scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use serde::{Deserialize, Serialize};

/// Geographic city information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Provider identifier, stringified
    pub id: String,
    /// City name in English
    pub name: String,
    /// Country name
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Population, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// IANA timezone identifier (e.g. "Europe/London")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
