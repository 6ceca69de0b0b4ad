// ABOUTME: Shared test utilities and builders for integration tests
// ABOUTME: Provides quiet logging, reference athlete/session fixtures, and in-memory resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fuelcast`
//!
//! The reference scenario is a 70 kg athlete riding 120 minutes at RPE 6 in
//! 20 °C, 50 % humidity at sea level.

use std::env;
use std::sync::{Arc, Once};

use fuelcast::audit::InMemoryAuditLog;
use fuelcast::catalog::InMemoryFoodCatalog;
use fuelcast::config::ServerConfig;
use fuelcast::intelligence::{FuelingConfig, FuelingEngine};
use fuelcast::models::{
    AthleteProfile, EnvironmentContext, PredictionRequest, SessionContext, SportType,
};
use fuelcast::profiles::InMemoryProfileStore;
use fuelcast::resources::ServerResources;
use fuelcast::workouts::InMemoryWorkoutStore;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg athlete with neutral GI tolerance and nothing else known
pub const fn reference_profile() -> AthleteProfile {
    AthleteProfile::with_body_mass(70.0)
}

/// Two-hour ride at RPE 6
pub const fn cycling_session() -> SessionContext {
    SessionContext::new(SportType::Cycling, 120, 6.0)
}

/// 20 °C, 50 % humidity, sea level, flat
pub const fn reference_environment() -> EnvironmentContext {
    EnvironmentContext::new(20.0, 50.0, 0.0)
}

/// Reference request with no foods selected
pub const fn reference_request() -> PredictionRequest {
    request_for(cycling_session())
}

/// Reference athlete and conditions around an arbitrary session
pub const fn request_for(session: SessionContext) -> PredictionRequest {
    PredictionRequest {
        profile: reference_profile(),
        session,
        environment: reference_environment(),
        science_mode: true,
        selected_food_ids: Vec::new(),
    }
}

/// Engine on the built-in defaults, independent of `FUELING_*` overrides
pub fn test_engine() -> FuelingEngine {
    FuelingEngine::with_config(FuelingConfig::default())
}

/// In-memory server resources on default configuration
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    let config = ServerConfig::default();
    let audit = Arc::new(InMemoryAuditLog::new(config.audit_capacity));
    Arc::new(ServerResources::new(
        config,
        test_engine(),
        Arc::new(InMemoryFoodCatalog::new()),
        Arc::new(InMemoryProfileStore::new()),
        audit,
        Arc::new(InMemoryWorkoutStore::new()),
    ))
}

/// Absolute difference helper for float assertions
pub fn approx(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}
