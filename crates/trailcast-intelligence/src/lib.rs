// ABOUTME: Weather condition classification and activity suitability scoring engine
// ABOUTME: Decodes WMO codes, evaluates suitability rules, scores and ranks activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

#![deny(unsafe_code)]

//! # Trailcast Intelligence
//!
//! Deterministic, rule-based scoring of travel activities against current
//! weather. Nothing here performs I/O or fails: unknown weather codes decode
//! to `"Unknown"` and unknown activity identifiers score zero.
//!
//! Data flows leaves-first:
//!
//! 1. [`conditions`] turns a WMO code into a label and the label into keyword traits
//! 2. [`suitability`] answers "is this good weather for X?"
//! 3. [`scoring`] turns those answers into a 0-100 score with a reason
//! 4. [`recommendation`] scores every activity and ranks them

/// WMO weather code decoding and condition keyword classification
pub mod conditions;

/// Activity suitability predicates
pub mod suitability;

/// Per-activity scoring rules
pub mod scoring;

/// Ranking of all activities and raw-identifier lookups
pub mod recommendation;

pub use conditions::{decode_weather_code, ConditionTraits, UNKNOWN_CONDITION};
pub use recommendation::{describe_activity, display_name, is_valid_kind, recommend};
pub use scoring::{
    score_activity, score_conditions, score_raw_activity, MAX_SCORE, UNKNOWN_ACTIVITY_REASON,
};
pub use suitability::Conditions;
