// ABOUTME: Route handlers for fueling predictions, what-if simulations, and the audit trail
// ABOUTME: Thin handlers that resolve the athlete identity and delegate to FuelingService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::audit::AuditEntry;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::athlete_id;
use crate::services::{PredictionDraft, SimulationDraft};

/// Query parameters for the audit listing
#[derive(Debug, Default, Deserialize)]
pub struct AuditQuery {
    /// Number of entries (1-200, default 20)
    pub limit: Option<usize>,
}

/// Audit listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuditListResponse {
    /// Entries, newest first
    pub items: Vec<AuditEntry>,
    /// Athlete the entries belong to
    pub athlete_id: String,
}

/// Fueling routes handler
pub struct FuelingRoutes;

impl FuelingRoutes {
    /// Create prediction, simulation, and audit routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/predict", post(Self::handle_predict))
            .route("/api/v1/simulate", post(Self::handle_simulate))
            .route("/api/v1/audit", get(Self::handle_audit))
            .with_state(resources)
    }

    /// Handle POST /api/v1/predict
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(draft): Json<PredictionDraft>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let response = resources.fueling().predict(&athlete, draft).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/v1/simulate
    async fn handle_simulate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(draft): Json<SimulationDraft>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let response = resources.fueling().simulate(&athlete, draft).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/v1/audit
    async fn handle_audit(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<AuditQuery>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let items = resources
            .fueling()
            .recent_audit(&athlete, query.limit)
            .await?;
        let response = AuditListResponse {
            items,
            athlete_id: athlete,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
