// ABOUTME: Service information and health check route handlers
// ABOUTME: Unauthenticated endpoints for clients, monitoring, and load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Service information and health check routes

use crate::constants::service::{API_NAME, SERVICE_NAME};
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the root information and health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_root() -> Json<Value> {
        Json(json!({
            "name": API_NAME,
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Travel planning API with weather data and activity recommendations",
            "endpoints": {
                "health": "/health",
                "citySearch": "/api/cities/search?query={name}",
                "nearestCity": "/api/cities/nearest?latitude={lat}&longitude={lon}",
                "weather": "/api/weather?latitude={lat}&longitude={lon}",
                "activities": "/api/activities",
                "recommendations": "/api/activities/recommendations?latitude={lat}&longitude={lon}",
                "activityScore": "/api/activities/{type}/score?latitude={lat}&longitude={lon}"
            },
            "features": [
                "City search",
                "Real-time weather data",
                "7-day forecasts",
                "Activity recommendations"
            ]
        }))
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
            "environment": resources.config.environment.as_str()
        }))
    }
}
