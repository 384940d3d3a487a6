// ABOUTME: Activity scoring rules that turn weather conditions into 0-100 scores
// ABOUTME: One rule per activity kind plus a zero-score fallback for unknown identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Activity scorer
//!
//! Each activity has a "good" branch (base score plus bonuses, capped at
//! [`MAX_SCORE`]) and one or two fixed fallback scores. Scores are never
//! negative: every constant below is non-negative.

use crate::suitability::Conditions;
use trailcast_core::models::{ActivityKind, ScoreResult, WeatherSnapshot};

/// Upper bound of every score
pub const MAX_SCORE: u32 = 100;

/// Reason returned for identifiers outside [`ActivityKind`]
pub const UNKNOWN_ACTIVITY_REASON: &str = "Unknown activity type";

/// Score a known activity against a weather snapshot
#[must_use]
pub fn score_activity(kind: ActivityKind, weather: &WeatherSnapshot) -> ScoreResult {
    score_conditions(kind, &Conditions::from(weather))
}

/// Score a raw activity identifier; unknown identifiers score 0
#[must_use]
pub fn score_raw_activity(raw_kind: &str, weather: &WeatherSnapshot) -> ScoreResult {
    raw_kind.parse::<ActivityKind>().map_or_else(
        |_| ScoreResult::new(0, UNKNOWN_ACTIVITY_REASON),
        |kind| score_activity(kind, weather),
    )
}

/// Score a known activity against pre-classified conditions
#[must_use]
pub fn score_conditions(kind: ActivityKind, conditions: &Conditions) -> ScoreResult {
    match kind {
        ActivityKind::Skiing => score_skiing(conditions),
        ActivityKind::Surfing => score_surfing(conditions),
        ActivityKind::OutdoorSightseeing => score_outdoor_sightseeing(conditions),
        ActivityKind::IndoorSightseeing => score_indoor_sightseeing(conditions),
    }
}

/// Add `bonus` when `condition` holds
const fn bonus(condition: bool, bonus: u32) -> u32 {
    if condition {
        bonus
    } else {
        0
    }
}

fn score_skiing(c: &Conditions) -> ScoreResult {
    if c.is_good_skiing() {
        let score = 80 + bonus(c.traits.is_snowy(), 15) + bonus(c.temperature <= -5.0, 5);
        ScoreResult::new(
            score.min(MAX_SCORE),
            "Excellent skiing conditions with cold temperature and good weather",
        )
    } else if c.temperature <= 5.0 {
        ScoreResult::new(
            40,
            "Decent skiing conditions but may lack snow or have strong winds",
        )
    } else {
        ScoreResult::new(
            10,
            "Poor skiing conditions - too warm or unsuitable weather",
        )
    }
}

fn score_surfing(c: &Conditions) -> ScoreResult {
    if c.is_good_surfing() {
        // Some wind helps build surf
        let score = 75
            + bonus(c.temperature >= 20.0, 10)
            + bonus(c.traits.is_clear(), 10)
            + bonus((10.0..=20.0).contains(&c.wind_speed), 5);
        ScoreResult::new(
            score.min(MAX_SCORE),
            "Great surfing conditions with warm weather and good winds",
        )
    } else if c.temperature >= 10.0 && !c.traits.is_stormy() {
        ScoreResult::new(
            45,
            "Moderate surfing conditions - weather is acceptable but not ideal",
        )
    } else {
        ScoreResult::new(15, "Poor surfing conditions - too cold, stormy, or windy")
    }
}

fn score_outdoor_sightseeing(c: &Conditions) -> ScoreResult {
    if c.is_good_outdoor_sightseeing() {
        let score = 85
            + bonus((15.0..=25.0).contains(&c.temperature), 10)
            + bonus(c.traits.is_clear(), 5);
        ScoreResult::new(
            score.min(MAX_SCORE),
            "Perfect outdoor sightseeing weather with clear visibility and comfortable temperature",
        )
    } else if (0.0..=35.0).contains(&c.temperature) && c.visibility >= 1000.0 {
        ScoreResult::new(
            50,
            "Acceptable outdoor sightseeing conditions but weather could be better",
        )
    } else {
        ScoreResult::new(
            20,
            "Poor outdoor sightseeing conditions - bad weather or low visibility",
        )
    }
}

fn score_indoor_sightseeing(c: &Conditions) -> ScoreResult {
    if c.is_good_indoor_sightseeing() {
        let score = 85
            + bonus(c.traits.is_wet(), 10)
            + bonus(c.temperature < 0.0 || c.temperature > 35.0, 5);
        ScoreResult::new(
            score.min(MAX_SCORE),
            "Perfect indoor sightseeing weather - outdoor conditions encourage staying inside",
        )
    } else {
        ScoreResult::new(
            30,
            "Indoor sightseeing is always an option, but outdoor weather is quite pleasant",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temperature: f64, condition: &str, wind_speed: f64, visibility: f64) -> WeatherSnapshot {
        WeatherSnapshot::new(temperature, condition, wind_speed, visibility)
    }

    #[test]
    fn test_skiing_in_fresh_snow() {
        let result = score_activity(
            ActivityKind::Skiing,
            &snapshot(-5.0, "Slight snow fall", 15.0, 10_000.0),
        );
        assert_eq!(result.score, 100);
        assert!(result.reason.contains("Excellent skiing conditions"));
    }

    #[test]
    fn test_skiing_cold_clear_without_snow() {
        let result = score_activity(ActivityKind::Skiing, &snapshot(-1.0, "Clear sky", 5.0, 10_000.0));
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_skiing_fallbacks() {
        let decent = score_activity(ActivityKind::Skiing, &snapshot(3.0, "Overcast", 5.0, 10_000.0));
        assert_eq!(decent.score, 40);
        assert!(decent.reason.starts_with("Decent skiing conditions"));

        let poor = score_activity(ActivityKind::Skiing, &snapshot(20.0, "Clear sky", 5.0, 10_000.0));
        assert_eq!(poor.score, 10);
        assert!(poor.reason.starts_with("Poor skiing conditions"));
    }

    #[test]
    fn test_surfing_on_a_clear_warm_day() {
        let result = score_activity(ActivityKind::Surfing, &snapshot(25.0, "Clear sky", 15.0, 10_000.0));
        assert_eq!(result.score, 100);
        assert!(result.reason.contains("Great surfing conditions"));
    }

    #[test]
    fn test_surfing_bonus_components() {
        // Warm but cloudy and calm: only the temperature bonus applies
        let result = score_activity(ActivityKind::Surfing, &snapshot(22.0, "Overcast", 5.0, 10_000.0));
        assert_eq!(result.score, 85);

        // Just warm enough, mainly clear, breezy
        let result = score_activity(ActivityKind::Surfing, &snapshot(16.0, "Mainly clear", 20.0, 10_000.0));
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_surfing_fallbacks() {
        let moderate = score_activity(ActivityKind::Surfing, &snapshot(15.0, "Moderate rain", 20.0, 5000.0));
        assert_eq!(moderate.score, 45);

        let stormy = score_activity(ActivityKind::Surfing, &snapshot(25.0, "Thunderstorm", 20.0, 5000.0));
        assert_eq!(stormy.score, 15);

        let cold = score_activity(ActivityKind::Surfing, &snapshot(5.0, "Clear sky", 5.0, 10_000.0));
        assert_eq!(cold.score, 15);
        assert!(cold.reason.starts_with("Poor surfing conditions"));
    }

    #[test]
    fn test_outdoor_sightseeing_perfect_day() {
        let result = score_activity(
            ActivityKind::OutdoorSightseeing,
            &snapshot(22.0, "Clear sky", 10.0, 15_000.0),
        );
        assert_eq!(result.score, 100);
        assert!(result.reason.contains("Perfect outdoor sightseeing"));
    }

    #[test]
    fn test_outdoor_sightseeing_fallbacks() {
        let acceptable = score_activity(
            ActivityKind::OutdoorSightseeing,
            &snapshot(15.0, "Moderate rain", 20.0, 5000.0),
        );
        assert_eq!(acceptable.score, 50);

        let poor = score_activity(
            ActivityKind::OutdoorSightseeing,
            &snapshot(2.0, "Heavy rain", 30.0, 500.0),
        );
        assert_eq!(poor.score, 20);

        let freezing = score_activity(
            ActivityKind::OutdoorSightseeing,
            &snapshot(-3.0, "Clear sky", 5.0, 10_000.0),
        );
        assert_eq!(freezing.score, 20);
    }

    #[test]
    fn test_indoor_sightseeing_in_heavy_rain() {
        let weather = snapshot(2.0, "Heavy rain", 30.0, 1000.0);
        let indoor = score_activity(ActivityKind::IndoorSightseeing, &weather);
        let outdoor = score_activity(ActivityKind::OutdoorSightseeing, &weather);

        assert_eq!(indoor.score, 95);
        assert!(indoor.reason.contains("Perfect indoor sightseeing"));
        assert!(indoor.score > outdoor.score);
    }

    #[test]
    fn test_indoor_sightseeing_extreme_temperature_bonus() {
        let result = score_activity(
            ActivityKind::IndoorSightseeing,
            &snapshot(-10.0, "Thunderstorm with heavy hail", 20.0, 2000.0),
        );
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_indoor_sightseeing_on_a_pleasant_day() {
        let result = score_activity(
            ActivityKind::IndoorSightseeing,
            &snapshot(20.0, "Clear sky", 10.0, 10_000.0),
        );
        assert_eq!(result.score, 30);
        assert!(result.reason.starts_with("Indoor sightseeing is always an option"));
    }

    #[test]
    fn test_snow_grains_rate_as_rainy() {
        let weather = snapshot(20.0, "Snow grains", 10.0, 10_000.0);

        assert_eq!(score_activity(ActivityKind::Surfing, &weather).score, 45);
        assert_eq!(
            score_activity(ActivityKind::OutdoorSightseeing, &weather).score,
            50
        );
        assert_eq!(
            score_activity(ActivityKind::IndoorSightseeing, &weather).score,
            95
        );
    }

    #[test]
    fn test_unknown_activity_scores_zero() {
        let result = score_raw_activity("UNKNOWN_ACTIVITY", &snapshot(20.0, "Clear sky", 10.0, 10_000.0));
        assert_eq!(result, ScoreResult::new(0, UNKNOWN_ACTIVITY_REASON));
    }

    #[test]
    fn test_raw_activity_matches_typed_activity() {
        let weather = snapshot(-5.0, "Slight snow fall", 15.0, 10_000.0);
        assert_eq!(
            score_raw_activity("SKIING", &weather),
            score_activity(ActivityKind::Skiing, &weather)
        );
    }

    #[test]
    fn test_scores_stay_in_range_for_extreme_inputs() {
        let extremes = [
            snapshot(-80.0, "Heavy snow showers", 0.0, 0.0),
            snapshot(60.0, "Clear sky", 200.0, 100_000.0),
            snapshot(0.0, "Unknown", -5.0, -1.0),
            snapshot(f64::NAN, "Thunderstorm", f64::NAN, f64::NAN),
            snapshot(f64::INFINITY, "Partly cloudy", f64::NEG_INFINITY, f64::INFINITY),
        ];
        for weather in &extremes {
            for kind in ActivityKind::ALL {
                let result = score_activity(kind, weather);
                assert!(result.score <= MAX_SCORE, "{kind} scored {}", result.score);
                assert!(!result.reason.is_empty());
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let weather = snapshot(12.0, "Moderate drizzle", 18.0, 7000.0);
        for kind in ActivityKind::ALL {
            assert_eq!(score_activity(kind, &weather), score_activity(kind, &weather));
        }
    }
}
