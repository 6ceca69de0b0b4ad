// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::{endpoints, service_names};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "service": service_names::FUELCAST_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<Value> {
            Json(json!({
                "status": "ready",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(endpoints::HEALTH_CHECK, get(health_handler))
            .route(endpoints::READY_CHECK, get(ready_handler))
    }
}
