// ABOUTME: Activity route handlers for the catalog, ranked recommendations, and single scores
// ABOUTME: Raw activity identifiers from the path are parsed here, at the API boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

use super::{parse_query, tag_request_id, CoordinatesQuery};
use crate::errors::AppError;
use crate::middleware::RequestId;
use crate::models::{ActivityKind, RankedActivity, ScoreResult, UnknownActivityKind};
use crate::resources::ServerResources;
use crate::services::{validate_coordinates, ActivityInfo, ActivityService};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Activity routes
pub struct ActivityRoutes;

impl ActivityRoutes {
    /// Create all activity routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/activities", get(Self::handle_catalog))
            .route(
                "/api/activities/recommendations",
                get(Self::handle_recommendations),
            )
            .route("/api/activities/:kind/score", get(Self::handle_score))
            .with_state(resources)
    }

    async fn handle_catalog() -> Json<Vec<ActivityInfo>> {
        Json(ActivityService::catalog())
    }

    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        query: Result<Query<CoordinatesQuery>, QueryRejection>,
    ) -> Result<Json<Vec<RankedActivity>>, AppError> {
        let tag = tag_request_id(&request_id);
        let coords = parse_query(query).map_err(&tag)?;
        let ranked = resources
            .activities
            .recommendations(coords.latitude, coords.longitude)
            .await
            .map_err(&tag)?;
        Ok(Json(ranked))
    }

    async fn handle_score(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        Path(raw_kind): Path<String>,
        query: Result<Query<CoordinatesQuery>, QueryRejection>,
    ) -> Result<Json<Option<ScoreResult>>, AppError> {
        let tag = tag_request_id(&request_id);
        let kind: ActivityKind = raw_kind
            .parse()
            .map_err(|e: UnknownActivityKind| tag(AppError::invalid_input(e.to_string())))?;
        let coords = parse_query(query).map_err(&tag)?;
        validate_coordinates(coords.latitude, coords.longitude).map_err(&tag)?;

        let score = resources
            .activities
            .score_one(kind, coords.latitude, coords.longitude)
            .await;
        Ok(Json(score))
    }
}
