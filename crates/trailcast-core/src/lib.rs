// ABOUTME: Core types and constants for the Trailcast travel planning API
// ABOUTME: Foundation crate with error handling, weather/city/activity models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

#![deny(unsafe_code)]

//! # Trailcast Core
//!
//! Foundation crate providing shared types and constants for the Trailcast
//! travel planning API. It is designed to change infrequently so the provider
//! and intelligence crates can compile in parallel on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Upstream endpoints, limits, and user-facing messages
//! - **models**: Weather snapshots, forecasts, cities, and activity types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WeatherSnapshot`, `City`, `ActivityKind`, ...)
pub mod models;
