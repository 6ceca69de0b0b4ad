// ABOUTME: Route handlers for workout analytics over a trailing window of days
// ABOUTME: Completed-session summary and per-day chart series, 7 to 365 days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::athlete_id;
use crate::workouts::{AnalyticsSummary, ChartSeries};

/// Analytics window
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// Trailing days (7-365, default 30)
    pub days: Option<u32>,
}

/// Summary response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Completed-session summary
    pub summary: AnalyticsSummary,
}

/// Chart response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartsResponse {
    /// Per-day series
    pub charts: ChartSeries,
}

/// Analytics routes handler
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/v1/analytics/summary", get(Self::handle_summary))
            .route("/api/v1/analytics/charts", get(Self::handle_charts))
            .with_state(resources)
    }

    /// Handle GET /api/v1/analytics/summary
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<AnalyticsQuery>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let summary = resources.workout_log().summary(&athlete, query.days).await?;
        Ok((StatusCode::OK, Json(SummaryResponse { summary })).into_response())
    }

    /// Handle GET /api/v1/analytics/charts
    async fn handle_charts(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<AnalyticsQuery>,
    ) -> Result<Response, AppError> {
        let athlete = athlete_id(&headers);
        let charts = resources
            .workout_log()
            .chart_series(&athlete, query.days)
            .await?;
        Ok((StatusCode::OK, Json(ChartsResponse { charts })).into_response())
    }
}
