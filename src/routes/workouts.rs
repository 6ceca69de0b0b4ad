// ABOUTME: Route handlers for the workout log and per-workout fueling events
// ABOUTME: Workouts and events are scoped to the calling athlete; foreign ids read as not found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::athlete_id;
use crate::workouts::{
    FuelingEvent, NewFuelingEvent, NewWorkout, Workout, WorkoutStatus, WorkoutUpdate,
};

/// Query parameters for the workout listing
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutListQuery {
    /// Maximum number of workouts (1-500, default 100)
    pub limit: Option<usize>,
    /// Only planned or only completed workouts
    pub status: Option<WorkoutStatus>,
    /// Only workouts from this source
    pub source: Option<String>,
}

/// Workout listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutListResponse {
    /// Workouts, latest start first
    pub items: Vec<Workout>,
}

/// Single workout response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutResponse {
    /// The workout
    pub item: Workout,
}

/// Fueling event listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct FuelingEventListResponse {
    /// Events by minute offset
    pub items: Vec<FuelingEvent>,
}

/// Single fueling event response
#[derive(Debug, Serialize, Deserialize)]
pub struct FuelingEventResponse {
    /// The recorded event
    pub item: FuelingEvent,
}

/// Workout log routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create workout log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/v1/workouts/:id",
                get(Self::handle_get).put(Self::handle_update),
            )
            .route(
                "/api/v1/workouts/:id/fueling",
                get(Self::handle_list_events).post(Self::handle_add_event),
            )
            .route(
                "/api/v1/workouts/:id/fueling/:event_id",
                delete(Self::handle_delete_event),
            )
            .with_state(resources)
    }

    /// Handle GET /api/v1/workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<WorkoutListQuery>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let items = resources
            .workout_log()
            .list(&athlete, query.limit, query.status, query.source)
            .await?;
        Ok((StatusCode::OK, Json(WorkoutListResponse { items })).into_response())
    }

    /// Handle POST /api/v1/workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(workout): Json<NewWorkout>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let item = resources.workout_log().create(&athlete, workout).await?;
        Ok((StatusCode::CREATED, Json(WorkoutResponse { item })).into_response())
    }

    /// Handle GET /api/v1/workouts/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<u64>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let item = resources.workout_log().get(&athlete, id).await?;
        Ok((StatusCode::OK, Json(WorkoutResponse { item })).into_response())
    }

    /// Handle PUT /api/v1/workouts/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<u64>,
        Json(update): Json<WorkoutUpdate>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let item = resources
            .workout_log()
            .update(&athlete, id, &update)
            .await?;
        Ok((StatusCode::OK, Json(WorkoutResponse { item })).into_response())
    }

    /// Handle GET /api/v1/workouts/:id/fueling
    async fn handle_list_events(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<u64>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let items = resources.workout_log().list_events(&athlete, id).await?;
        Ok((StatusCode::OK, Json(FuelingEventListResponse { items })).into_response())
    }

    /// Handle POST /api/v1/workouts/:id/fueling
    async fn handle_add_event(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<u64>,
        Json(event): Json<NewFuelingEvent>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let item = resources
            .workout_log()
            .add_event(&athlete, id, event)
            .await?;
        Ok((StatusCode::CREATED, Json(FuelingEventResponse { item })).into_response())
    }

    /// Handle DELETE /api/v1/workouts/:id/fueling/:event_id
    async fn handle_delete_event(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((id, event_id)): Path<(u64, u64)>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        resources
            .workout_log()
            .delete_event(&athlete, id, event_id)
            .await?;
        Ok((StatusCode::OK, Json(json!({ "ok": true }))).into_response())
    }
}
