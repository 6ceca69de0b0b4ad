// ABOUTME: Prediction and simulation request/response models
// ABOUTME: Three named strategies, confidence band, rationale notes, and schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::athlete::AthleteProfile;
use super::environment::EnvironmentContext;
use super::nutrition::FuelingAction;
use super::session::SessionContext;

const fn default_science_mode() -> bool {
    true
}

/// Risk posture of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Lower intake, lower GI risk
    Conservative,
    /// Reference recommendation
    Balanced,
    /// Higher intake for trained guts
    Aggressive,
}

impl StrategyType {
    /// All strategies in presentation order
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Balanced, Self::Aggressive];

    /// Wire name of the strategy
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the engine needs for one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Athlete profile
    pub profile: AthleteProfile,
    /// Session
    pub session: SessionContext,
    /// Conditions
    pub environment: EnvironmentContext,
    /// Science mode: heavier pre-workout carbohydrate loading and a higher confidence center
    #[serde(default = "default_science_mode")]
    pub science_mode: bool,
    /// Foods the athlete wants in the schedule (resolved by the food catalog)
    #[serde(default)]
    pub selected_food_ids: Vec<u64>,
}

/// One of the three parallel recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    /// Strategy name
    pub strategy: StrategyType,
    /// Carbohydrate per hour (g/h)
    pub carbs_g_per_hour: f64,
    /// Fluid per hour (ml/h)
    pub hydration_ml_per_hour: f64,
    /// Sodium per hour (mg/h)
    pub sodium_mg_per_hour: f64,
    /// Pre-workout carbohydrate (g)
    pub pre_workout_carbs_g: f64,
    /// Total carbohydrate during the session (g)
    pub during_workout_carbs_g_total: f64,
    /// Post-workout carbohydrate (g)
    pub post_workout_carbs_g: f64,
    /// GI distress risk (0-10)
    pub gi_risk_score: f64,
}

/// Engine output for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Opaque id used for audit correlation only
    pub recommendation_id: Uuid,
    /// Conservative, balanced, aggressive, in that order
    pub strategies: Vec<StrategyRecommendation>,
    /// Lower bound of the plausibility band
    pub confidence_low: f64,
    /// Upper bound of the plausibility band
    pub confidence_high: f64,
    /// One note per missing optional input
    pub uncertainty_notes: Vec<String>,
    /// How the numbers were derived
    pub rationale: Vec<String>,
    /// Fueling schedule ordered by minute offset
    pub fueling_schedule: Vec<FuelingAction>,
}

impl PredictionResponse {
    /// Recommendation for a strategy
    #[must_use]
    pub fn strategy(&self, strategy: StrategyType) -> Option<&StrategyRecommendation> {
        self.strategies.iter().find(|s| s.strategy == strategy)
    }

    /// The balanced (reference) recommendation
    #[must_use]
    pub fn balanced(&self) -> Option<&StrategyRecommendation> {
        self.strategy(StrategyType::Balanced)
    }
}

/// A baseline request plus "what-if" perturbations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Unmodified request
    pub base_request: PredictionRequest,
    /// Temperature increase (°C)
    #[serde(default)]
    pub hotter_by_c: f64,
    /// Duration increase (minutes); may be negative
    #[serde(default)]
    pub longer_by_minutes: i32,
    /// Perceived exertion change on the raw 1-10 scale
    #[serde(default)]
    pub intensity_delta_rpe: f64,
}

/// Balanced-strategy difference between simulated and baseline predictions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyDelta {
    /// Carbohydrate change (g/h)
    pub carbs_g_per_hour: f64,
    /// Fluid change (ml/h)
    pub hydration_ml_per_hour: f64,
    /// Sodium change (mg/h)
    pub sodium_mg_per_hour: f64,
    /// GI risk change
    pub gi_risk_score: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

impl StrategyDelta {
    /// `simulated - baseline`, field by field, at output precision
    ///
    /// Carbs to 0.1 g, fluid and sodium to whole units, GI risk to 0.01.
    #[must_use]
    pub fn between(baseline: &StrategyRecommendation, simulated: &StrategyRecommendation) -> Self {
        Self {
            carbs_g_per_hour: round_to(
                simulated.carbs_g_per_hour - baseline.carbs_g_per_hour,
                1,
            ),
            hydration_ml_per_hour: round_to(
                simulated.hydration_ml_per_hour - baseline.hydration_ml_per_hour,
                0,
            ),
            sodium_mg_per_hour: round_to(
                simulated.sodium_mg_per_hour - baseline.sodium_mg_per_hour,
                0,
            ),
            gi_risk_score: round_to(simulated.gi_risk_score - baseline.gi_risk_score, 2),
        }
    }
}

/// Baseline and simulated predictions with their difference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Prediction for the unmodified request
    pub baseline: PredictionResponse,
    /// Prediction for the perturbed request
    pub simulated: PredictionResponse,
    /// Numeric balanced-strategy deltas
    pub delta: StrategyDelta,
    /// Signed, human-readable deltas
    pub delta_summary: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn balanced(carbs: f64, fluid: f64, sodium: f64, gi: f64) -> StrategyRecommendation {
        StrategyRecommendation {
            strategy: StrategyType::Balanced,
            carbs_g_per_hour: carbs,
            hydration_ml_per_hour: fluid,
            sodium_mg_per_hour: sodium,
            pre_workout_carbs_g: 0.0,
            during_workout_carbs_g_total: 0.0,
            post_workout_carbs_g: 0.0,
            gi_risk_score: gi,
        }
    }

    #[test]
    fn test_delta_is_rounded_to_output_precision() {
        let baseline = balanced(54.7, 610.4, 702.6, 2.31);
        let simulated = balanced(55.9, 754.2, 811.1, 2.9);
        let delta = StrategyDelta::between(&baseline, &simulated);

        // Raw float subtraction gives 1.1999999999999957 here
        assert_eq!(delta.carbs_g_per_hour, 1.2);
        assert_eq!(delta.hydration_ml_per_hour, 144.0);
        assert_eq!(delta.sodium_mg_per_hour, 109.0);
        assert_eq!(delta.gi_risk_score, 0.59);
    }

    #[test]
    fn test_negative_delta_keeps_sign() {
        let delta = StrategyDelta::between(
            &balanced(60.0, 500.0, 600.0, 3.0),
            &balanced(48.25, 420.6, 540.4, 2.004),
        );
        assert_eq!(delta.carbs_g_per_hour, -11.8);
        assert_eq!(delta.hydration_ml_per_hour, -79.0);
        assert_eq!(delta.sodium_mg_per_hour, -60.0);
        assert_eq!(delta.gi_risk_score, -1.0);
    }
}
