// ABOUTME: Route module organization for the fuelcast HTTP endpoints
// ABOUTME: Merges domain routers and applies request tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the fuelcast server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to [`crate::services::FuelingService`] or
//! [`crate::services::WorkoutService`].

/// Workout analytics routes
pub mod analytics;
/// Custom food catalog routes
pub mod foods;
/// Prediction, simulation, and audit routes
pub mod fueling;
/// Health check and readiness routes
pub mod health;
/// Athlete profile routes
pub mod profile;
/// Workout log routes
pub mod workouts;

pub use analytics::AnalyticsRoutes;
pub use foods::FoodRoutes;
pub use fueling::FuelingRoutes;
pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use workouts::WorkoutRoutes;

use std::sync::Arc;

use axum::Router;
use http::{header::HeaderName, HeaderMap, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::constants::defaults::{ANONYMOUS_ATHLETE, ATHLETE_ID_HEADER};
use crate::resources::ServerResources;

/// Longest accepted athlete identity
const MAX_ATHLETE_ID_LEN: usize = 128;

/// Athlete identity from the `x-athlete-id` header, `anonymous` when absent or unusable
#[must_use]
pub fn athlete_id(headers: &HeaderMap) -> String {
    headers
        .get(ATHLETE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_ATHLETE_ID_LEN)
        .unwrap_or(ANONYMOUS_ATHLETE)
        .to_owned()
}

/// CORS layer from the configured origin list
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static(ATHLETE_ID_HEADER),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
}

/// Complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(FuelingRoutes::routes(Arc::clone(&resources)))
        .merge(FoodRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(AnalyticsRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
