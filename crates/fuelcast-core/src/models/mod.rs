// ABOUTME: Core data models for fueling predictions
// ABOUTME: Re-exports athlete, session, environment, nutrition, and prediction value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are plain value objects: constructed per call, passed by value or
//! reference into the engine, and discarded after the response is produced.

/// Athlete profile (body mass, thresholds, gut capacity)
pub mod athlete;
/// Environmental conditions for a session
pub mod environment;
/// Food catalog items and scheduled fueling actions
pub mod nutrition;
/// Prediction and simulation requests/responses
pub mod prediction;
/// Planned or completed session context and telemetry
pub mod session;
/// Sport enumeration and sport categories
pub mod sport;

pub use athlete::AthleteProfile;
pub use environment::EnvironmentContext;
pub use nutrition::{FoodItem, FuelingAction};
pub use prediction::{
    PredictionRequest, PredictionResponse, SimulationRequest, SimulationResponse, StrategyDelta,
    StrategyRecommendation, StrategyType,
};
pub use session::{IntensityMode, SessionContext, SessionStatus};
pub use sport::{Discipline, SportType};
