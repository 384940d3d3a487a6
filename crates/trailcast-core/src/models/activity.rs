// ABOUTME: Activity types and scoring result models for weather-based recommendations
// ABOUTME: ActivityKind is a closed set; raw identifiers are parsed at the API boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activities the recommendation engine knows how to score
///
/// Declaration order matters: it is the tie-break order when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    /// Alpine skiing and winter sports
    Skiing,
    /// Ocean surfing and water sports
    Surfing,
    /// Museums, galleries, and other indoor attractions
    IndoorSightseeing,
    /// Parks, monuments, and other outdoor attractions
    OutdoorSightseeing,
}

impl ActivityKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 4] = [
        Self::Skiing,
        Self::Surfing,
        Self::IndoorSightseeing,
        Self::OutdoorSightseeing,
    ];

    /// Enumeration identifier (e.g. `INDOOR_SIGHTSEEING`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skiing => "SKIING",
            Self::Surfing => "SURFING",
            Self::IndoorSightseeing => "INDOOR_SIGHTSEEING",
            Self::OutdoorSightseeing => "OUTDOOR_SIGHTSEEING",
        }
    }

    /// Display name shown to users
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Skiing => "Skiing",
            Self::Surfing => "Surfing",
            Self::IndoorSightseeing => "Indoor sightseeing",
            Self::OutdoorSightseeing => "Outdoor sightseeing",
        }
    }

    /// Short description of what the activity covers
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Skiing => "Alpine skiing and winter sports activities",
            Self::Surfing => "Ocean surfing and water sports",
            Self::IndoorSightseeing => "Museums, galleries, and indoor attractions",
            Self::OutdoorSightseeing => "Parks, monuments, and outdoor attractions",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw identifier that is not one of the known activity kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid activity type: {0}")]
pub struct UnknownActivityKind(pub String);

impl FromStr for ActivityKind {
    type Err = UnknownActivityKind;

    /// Exact, case-sensitive match on the enumeration identifier; no trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownActivityKind(s.to_owned()))
    }
}

/// Suitability score for one activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score in `[0, 100]`, higher is more suitable
    pub score: u32,
    /// Human-readable explanation of the score
    pub reason: String,
}

impl ScoreResult {
    /// Create a score result
    #[must_use]
    pub fn new(score: u32, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }
}

/// Scored activity with its display name, as returned by recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedActivity {
    /// Display name (e.g. "Outdoor sightseeing")
    #[serde(rename = "type")]
    pub name: String,
    /// Score and explanation
    #[serde(flatten)]
    pub result: ScoreResult,
}
