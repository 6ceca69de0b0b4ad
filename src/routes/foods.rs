// ABOUTME: Route handlers for the food catalog (list, add custom, delete custom)
// ABOUTME: Built-in foods are shared; custom foods are scoped to the calling athlete
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

use crate::catalog::{FoodScope, NewFoodItem};
use crate::errors::AppError;
use crate::models::FoodItem;
use crate::resources::ServerResources;
use crate::routes::athlete_id;

/// Query parameters for the food listing
#[derive(Debug, Default, Deserialize)]
pub struct FoodListQuery {
    /// all, builtin, or custom
    #[serde(default)]
    pub scope: FoodScope,
}

/// Food listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodListResponse {
    /// Foods, built-in first
    pub items: Vec<FoodItem>,
}

/// Single food response
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodResponse {
    /// The created food
    pub item: FoodItem,
}

/// Food catalog routes handler
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create food catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/foods",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/v1/foods/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/v1/foods
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<FoodListQuery>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let items = resources.fueling().list_foods(&athlete, query.scope).await;
        Ok((StatusCode::OK, Json(FoodListResponse { items })).into_response())
    }

    /// Handle POST /api/v1/foods
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(food): Json<NewFoodItem>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let item = resources.fueling().add_food(&athlete, food).await?;
        Ok((StatusCode::CREATED, Json(FoodResponse { item })).into_response())
    }

    /// Handle DELETE /api/v1/foods/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<u64>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        resources.fueling().delete_food(&athlete, id).await?;
        Ok((StatusCode::OK, Json(json!({ "ok": true }))).into_response())
    }
}
