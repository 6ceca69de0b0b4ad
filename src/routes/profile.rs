// ABOUTME: Route handlers for reading and updating the athlete profile
// ABOUTME: PUT merges a partial update over the stored or default profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::profiles::{ProfileUpdate, StoredProfile};
use crate::resources::ServerResources;
use crate::routes::athlete_id;

/// Profile response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Athlete identity
    pub athlete_id: String,
    /// Stored or default profile
    pub profile: StoredProfile,
}

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/profile",
                get(Self::handle_get).put(Self::handle_update),
            )
            .with_state(resources)
    }

    /// Handle GET /api/v1/profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let profile = resources.fueling().profile(&athlete).await;
        let response = ProfileResponse {
            athlete_id: athlete,
            profile,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/v1/profile
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(update): Json<ProfileUpdate>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let profile = resources.fueling().update_profile(&athlete, &update).await?;
        let response = ProfileResponse {
            athlete_id: athlete,
            profile,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
