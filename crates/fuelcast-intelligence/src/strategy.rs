// ABOUTME: Strategy generator deriving conservative, balanced, and aggressive recommendations
// ABOUTME: Fixed multipliers on one shared base rate keep carb rates ordered across strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::{PredictionRequest, StrategyRecommendation, StrategyType};

use crate::config::FuelingConfig;
use crate::gi_risk::{gi_risk_score, GiRiskInputs};
use crate::hydration::sodium_mg_per_hour;
use crate::numeric::round_to;

/// Values shared by every strategy of one prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyInputs {
    /// Base carbohydrate rate (g/h)
    pub base_carbs_g_per_hour: f64,
    /// Clamped fluid target before strategy adjustments (ml/h)
    pub hydration_ml_per_hour: f64,
    /// Normalized effort (1-10)
    pub effort: f64,
}

/// Pre-workout carbohydrate (g), unrounded
#[must_use]
pub fn pre_workout_carbs(request: &PredictionRequest, config: &FuelingConfig) -> f64 {
    let strategy = &config.strategy;
    let per_kg = if request.science_mode {
        strategy.science_pre_carbs_per_kg
    } else {
        strategy.standard_pre_carbs_per_kg
    };
    strategy
        .pre_carbs_bounds
        .clamp(request.profile.body_mass_kg * per_kg)
}

/// Build one recommendation
#[must_use]
pub fn recommend(
    kind: StrategyType,
    request: &PredictionRequest,
    inputs: &StrategyInputs,
    config: &FuelingConfig,
) -> StrategyRecommendation {
    let strategy = &config.strategy;
    let carbs = strategy
        .carb_bounds
        .clamp(inputs.base_carbs_g_per_hour * strategy.multiplier(kind));

    let hydration = match kind {
        StrategyType::Conservative => config
            .hydration
            .bounds
            .clamp(inputs.hydration_ml_per_hour * strategy.conservative_hydration_multiplier),
        StrategyType::Balanced | StrategyType::Aggressive => inputs.hydration_ml_per_hour,
    };
    let sodium = sodium_mg_per_hour(
        hydration,
        &request.profile,
        &request.environment,
        &config.hydration.sodium,
    );

    let gi_risk = gi_risk_score(
        &GiRiskInputs {
            carbs_g_per_hour: carbs,
            effort: inputs.effort,
            temperature_c: request.environment.temperature_c,
            gi_tolerance_score: request.profile.gi_tolerance_score,
            sport: request.session.sport,
        },
        &config.gi_risk,
    );

    let post = strategy
        .post_carbs_bounds
        .clamp(request.profile.body_mass_kg * strategy.post_carbs_per_kg);

    StrategyRecommendation {
        strategy: kind,
        carbs_g_per_hour: round_to(carbs, 1),
        hydration_ml_per_hour: round_to(hydration, 0),
        sodium_mg_per_hour: round_to(sodium, 0),
        pre_workout_carbs_g: round_to(pre_workout_carbs(request, config), 1),
        during_workout_carbs_g_total: round_to(carbs * request.session.duration_hours(), 1),
        post_workout_carbs_g: round_to(post, 1),
        gi_risk_score: gi_risk,
    }
}

/// All three recommendations, conservative first
#[must_use]
pub fn generate(
    request: &PredictionRequest,
    inputs: &StrategyInputs,
    config: &FuelingConfig,
) -> Vec<StrategyRecommendation> {
    StrategyType::ALL
        .into_iter()
        .map(|kind| recommend(kind, request, inputs, config))
        .collect()
}
