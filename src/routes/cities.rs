// ABOUTME: City route handlers for name search and nearest-city lookup
// ABOUTME: Delegates validation and provider failure handling to CityService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::{parse_query, tag_request_id, CoordinatesQuery};
use crate::errors::AppError;
use crate::middleware::RequestId;
use crate::models::City;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for city search
#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

/// City routes
pub struct CityRoutes;

impl CityRoutes {
    /// Create all city routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/cities/search", get(Self::handle_search))
            .route("/api/cities/nearest", get(Self::handle_nearest))
            .with_state(resources)
    }

    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        query: Result<Query<SearchQuery>, QueryRejection>,
    ) -> Result<Json<Vec<City>>, AppError> {
        let tag = tag_request_id(&request_id);
        let params = parse_query(query).map_err(&tag)?;
        let cities = resources
            .cities
            .search(&params.query)
            .await
            .map_err(&tag)?;
        Ok(Json(cities))
    }

    async fn handle_nearest(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        query: Result<Query<CoordinatesQuery>, QueryRejection>,
    ) -> Result<Json<Option<City>>, AppError> {
        let tag = tag_request_id(&request_id);
        let coords = parse_query(query).map_err(&tag)?;
        let city = resources
            .cities
            .nearest(coords.latitude, coords.longitude)
            .await
            .map_err(&tag)?;
        Ok(Json(city))
    }
}
