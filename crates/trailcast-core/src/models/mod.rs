// ABOUTME: Core data models for weather, locations, and activity recommendations
// ABOUTME: Re-exports WeatherSnapshot, Weather, City, ActivityKind and scoring results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! # Data Models
//!
//! Provider-agnostic structures shared by the providers, the scoring engine,
//! and the HTTP layer. All of them are created per request and serialize with
//! the camelCase field names API clients expect.

mod activity;
mod city;
mod weather;

pub use activity::{ActivityKind, RankedActivity, ScoreResult, UnknownActivityKind};
pub use city::City;
pub use weather::{Weather, WeatherForecast, WeatherSnapshot};
