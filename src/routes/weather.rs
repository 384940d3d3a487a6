// ABOUTME: Weather route handler for current conditions and the seven-day forecast
// ABOUTME: Responds with JSON null when the provider has no data for the location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::{parse_query, tag_request_id, CoordinatesQuery};
use crate::errors::AppError;
use crate::middleware::RequestId;
use crate::models::Weather;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Weather routes
pub struct WeatherRoutes;

impl WeatherRoutes {
    /// Create all weather routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/weather", get(Self::handle_weather))
            .with_state(resources)
    }

    async fn handle_weather(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        query: Result<Query<CoordinatesQuery>, QueryRejection>,
    ) -> Result<Json<Option<Weather>>, AppError> {
        let tag = tag_request_id(&request_id);
        let coords = parse_query(query).map_err(&tag)?;
        let weather = resources
            .weather
            .weather(coords.latitude, coords.longitude)
            .await
            .map_err(&tag)?;
        Ok(Json(weather))
    }
}
