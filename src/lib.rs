// ABOUTME: Main library entry point for the Trailcast travel planning API
// ABOUTME: Wires providers, services, and HTTP routes for weather-driven activity recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

#![deny(unsafe_code)]

//! # Trailcast
//!
//! A travel planning API that combines city geocoding, current weather with a
//! seven-day forecast, and rule-based activity recommendations.
//!
//! ## Architecture
//!
//! - **Providers** (`trailcast-providers`): Open-Meteo forecast and geocoding clients
//! - **Intelligence** (`trailcast-intelligence`): condition decoding and activity scoring
//! - **Services**: validation and failure policy on top of providers
//! - **Routes**: thin axum handlers delegating to services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trailcast::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Trailcast configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs)
pub mod middleware;

/// Shared server state
pub mod resources;

/// HTTP route handlers grouped by domain
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Business services on top of the providers
pub mod services;

// Re-export workspace crates so callers only depend on `trailcast`
pub use trailcast_core::constants;
pub use trailcast_core::errors;
pub use trailcast_core::models;
pub use trailcast_intelligence as intelligence;
pub use trailcast_providers as providers;
