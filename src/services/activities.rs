// ABOUTME: Activity recommendations and single-activity scoring from current weather
// ABOUTME: Aggregate path fails loudly; single-score path degrades to no result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::validate_coordinates;
use crate::constants::messages::RECOMMENDATIONS_FAILED;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{describe_activity, is_valid_kind, recommend, score_activity};
use crate::models::{ActivityKind, RankedActivity, ScoreResult, WeatherSnapshot};
use crate::providers::WeatherProvider;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Catalog entry for one activity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityInfo {
    /// Enumeration identifier (e.g. `SKIING`)
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
}

impl From<ActivityKind> for ActivityInfo {
    fn from(kind: ActivityKind) -> Self {
        Self {
            kind,
            name: kind.display_name(),
            description: kind.description(),
        }
    }
}

/// Activity scoring against live weather
#[derive(Clone)]
pub struct ActivityService {
    provider: Arc<dyn WeatherProvider>,
}

impl ActivityService {
    /// Create a service backed by the given weather provider
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Every activity kind, in declaration order
    #[must_use]
    pub fn catalog() -> Vec<ActivityInfo> {
        ActivityKind::ALL.into_iter().map(ActivityInfo::from).collect()
    }

    /// Score all activities for a location, best first
    ///
    /// # Errors
    ///
    /// Returns an invalid input error for out-of-range coordinates. Any
    /// provider failure, or a provider with no data, yields an external
    /// service error with a fixed message; the cause is logged.
    pub async fn recommendations(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<Vec<RankedActivity>> {
        validate_coordinates(latitude, longitude)?;

        let snapshot = match self.provider.current_weather(latitude, longitude).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                error!(
                    provider = self.provider.name(),
                    latitude, longitude, "No current weather for activity recommendations"
                );
                return Err(AppError::external_service(RECOMMENDATIONS_FAILED));
            }
            Err(e) => {
                error!(provider = e.provider(), error = %e, "Activity recommendations failed");
                return Err(e.into_app_error(RECOMMENDATIONS_FAILED));
            }
        };

        let ranked = recommend(&snapshot);
        debug!(
            condition = %snapshot.condition,
            top = ranked.first().map(|r| r.name.as_str()),
            "Ranked activities"
        );
        Ok(ranked)
    }

    /// Score one activity for a location
    ///
    /// Returns `None` when the provider fails or has no data.
    pub async fn score_one(
        &self,
        kind: ActivityKind,
        latitude: f64,
        longitude: f64,
    ) -> Option<ScoreResult> {
        let snapshot = self.current_snapshot(latitude, longitude).await?;
        Some(score_activity(kind, &snapshot))
    }

    async fn current_snapshot(&self, latitude: f64, longitude: f64) -> Option<WeatherSnapshot> {
        match self.provider.current_weather(latitude, longitude).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(provider = e.provider(), error = %e, "Activity score lookup failed");
                None
            }
        }
    }

    /// Description for a raw activity identifier
    #[must_use]
    pub fn describe(raw_kind: &str) -> &'static str {
        describe_activity(raw_kind)
    }

    /// Whether a raw identifier names a known activity kind
    #[must_use]
    pub fn is_valid_kind(raw_kind: &str) -> bool {
        is_valid_kind(raw_kind)
    }
}
