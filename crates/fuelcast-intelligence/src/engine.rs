// ABOUTME: Fueling engine composing every pipeline stage into predict and simulate
// ABOUTME: Pure functions of their inputs; simulation runs both passes in parallel via rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The composed fueling pipeline.
//!
//! `predict` is total: any request inside the validated ranges yields a
//! response whose numbers are finite and clamped. Input validation belongs to
//! the caller.

use std::sync::Arc;

use fuelcast_core::models::{
    FoodItem, PredictionRequest, PredictionResponse, SimulationRequest, SimulationResponse,
    StrategyDelta, StrategyType,
};
use tracing::debug;
use uuid::Uuid;

use crate::carbohydrate;
use crate::config::FuelingConfig;
use crate::confidence;
use crate::hydration;
use crate::intensity;
use crate::load_factors;
use crate::scheduler;
use crate::simulation;
use crate::strategy::{self, StrategyInputs};

/// Fueling prediction engine
#[derive(Debug, Clone)]
pub struct FuelingEngine {
    config: Arc<FuelingConfig>,
}

impl Default for FuelingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FuelingEngine {
    /// Engine using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FuelingConfig::global().clone())
    }

    /// Engine with an explicit configuration
    #[must_use]
    pub fn with_config(config: FuelingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &FuelingConfig {
        &self.config
    }

    /// Predict fueling strategies, confidence, and schedule for one request
    ///
    /// `foods` are the catalog items available to the scheduler; an empty
    /// slice yields macro-mix placeholder slots.
    #[must_use]
    pub fn predict(&self, request: &PredictionRequest, foods: &[FoodItem]) -> PredictionResponse {
        let config = self.config.as_ref();
        let session = &request.session;
        let profile = &request.profile;

        let normalized = intensity::normalize(session, profile, &config.intensity);
        let load = load_factors::aggregate(session, &request.environment, &config.load_factors);
        let carbs = carbohydrate::base_rate(
            session,
            profile,
            &normalized,
            &load,
            &config.carbohydrate,
        );
        let hydration = hydration::hydration_ml_per_hour(
            session,
            profile,
            &request.environment,
            normalized.effort,
            &config.hydration,
        );

        let strategies = strategy::generate(
            request,
            &StrategyInputs {
                base_carbs_g_per_hour: carbs.g_per_hour,
                hydration_ml_per_hour: hydration,
                effort: normalized.effort,
            },
            config,
        );
        let band = confidence::estimate(request, &config.confidence);

        let fueling_schedule = strategies
            .iter()
            .find(|s| s.strategy == StrategyType::Balanced)
            .map(|balanced| scheduler::build_schedule(session, balanced, foods, &config.schedule))
            .unwrap_or_default();

        let mut rationale = vec![
            format!("Sport-specific multiplier applied for {}.", session.sport),
            "Environment load includes temperature, humidity, altitude, and terrain.".to_owned(),
            "GI risk includes carb density, intensity, heat, and tolerance profile.".to_owned(),
            "Outputs are shown in conservative/balanced/aggressive strategies.".to_owned(),
            normalized.note(),
        ];
        rationale.extend(load.notes);
        rationale.extend(carbs.notes);

        let recommendation_id = Uuid::new_v4();
        debug!(
            %recommendation_id,
            sport = %session.sport,
            duration_minutes = session.duration_minutes,
            effort = normalized.effort,
            base_carbs = carbs.g_per_hour,
            slots = fueling_schedule.len(),
            "Fueling prediction computed"
        );

        PredictionResponse {
            recommendation_id,
            strategies,
            confidence_low: band.low,
            confidence_high: band.high,
            uncertainty_notes: band.notes,
            rationale,
            fueling_schedule,
        }
    }

    /// Predict the baseline and a perturbed request and compare their balanced strategies
    #[must_use]
    pub fn simulate(&self, request: &SimulationRequest, foods: &[FoodItem]) -> SimulationResponse {
        let perturbed = simulation::perturb(request, self.config.intensity.effort_bounds);

        let (baseline, simulated) = rayon::join(
            || self.predict(&request.base_request, foods),
            || self.predict(&perturbed, foods),
        );

        let delta = match (baseline.balanced(), simulated.balanced()) {
            (Some(before), Some(after)) => StrategyDelta::between(before, after),
            _ => StrategyDelta::default(),
        };

        debug!(
            hotter_by_c = request.hotter_by_c,
            longer_by_minutes = request.longer_by_minutes,
            intensity_delta_rpe = request.intensity_delta_rpe,
            carbs_delta = delta.carbs_g_per_hour,
            "Fueling simulation computed"
        );

        SimulationResponse {
            delta_summary: simulation::summarize(&delta),
            baseline,
            simulated,
            delta,
        }
    }
}
