// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Protocol-agnostic services shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they extract the athlete identity and payload,
//! then delegate here.

/// Prediction, simulation, food, profile, and audit operations
pub mod fueling;
/// Workout log and analytics operations
pub mod workouts;

pub use fueling::{FuelingService, PredictionDraft, SimulationDraft};
pub use workouts::WorkoutService;

use crate::errors::AppError;
use crate::logging::AppLogger;

/// Log a rejected request and hand the error back
pub(crate) fn rejected(athlete_id: &str, error: AppError) -> AppError {
    AppLogger::log_rejected_request(athlete_id, error.context.field.as_deref(), &error.message);
    error
}
