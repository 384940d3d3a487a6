// ABOUTME: Ranks every activity kind against current weather
// ABOUTME: Also resolves raw activity identifiers to display names and descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use crate::scoring::score_conditions;
use crate::suitability::Conditions;
use trailcast_core::models::{ActivityKind, RankedActivity, WeatherSnapshot};

/// Description returned for identifiers outside [`ActivityKind`]
pub const UNKNOWN_ACTIVITY_DESCRIPTION: &str = "Unknown activity";

/// Score every activity kind and rank them by descending score
///
/// Ties keep declaration order of [`ActivityKind::ALL`] (the sort is stable).
#[must_use]
pub fn recommend(weather: &WeatherSnapshot) -> Vec<RankedActivity> {
    let conditions = Conditions::from(weather);
    let mut ranked: Vec<RankedActivity> = ActivityKind::ALL
        .into_iter()
        .map(|kind| RankedActivity {
            name: kind.display_name().to_owned(),
            result: score_conditions(kind, &conditions),
        })
        .collect();
    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked
}

/// Display name for a raw identifier, or the identifier itself if unknown
#[must_use]
pub fn display_name(raw_kind: &str) -> &str {
    raw_kind
        .parse::<ActivityKind>()
        .map_or(raw_kind, |kind| kind.display_name())
}

/// Description for a raw identifier, or "Unknown activity" if unknown
#[must_use]
pub fn describe_activity(raw_kind: &str) -> &'static str {
    raw_kind
        .parse::<ActivityKind>()
        .map_or(UNKNOWN_ACTIVITY_DESCRIPTION, ActivityKind::description)
}

/// Whether a raw identifier names a known activity kind
#[must_use]
pub fn is_valid_kind(raw_kind: &str) -> bool {
    raw_kind.parse::<ActivityKind>().is_ok()
}
