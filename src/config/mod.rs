// ABOUTME: Configuration module for environment-driven server settings
// ABOUTME: Exposes ServerConfig and the deployment environment type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig, UpstreamConfig};
