// ABOUTME: GI distress risk heuristic on a bounded 0-10 scale
// ABOUTME: Carb density, intensity, heat, tolerance, and sport category contributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::SportType;

use crate::config::GiRiskConfig;
use crate::numeric::round_to;

/// Inputs of the GI risk score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GiRiskInputs {
    /// Strategy carbohydrate rate (g/h)
    pub carbs_g_per_hour: f64,
    /// Normalized effort (1-10)
    pub effort: f64,
    /// Temperature (°C)
    pub temperature_c: f64,
    /// GI tolerance score (0-10)
    pub gi_tolerance_score: f64,
    /// Sport
    pub sport: SportType,
}

/// GI risk score, clamped to the configured range and rounded to 0.01
#[must_use]
pub fn gi_risk_score(inputs: &GiRiskInputs, config: &GiRiskConfig) -> f64 {
    let mut risk = config.base_score;
    risk += (inputs.carbs_g_per_hour - config.carb_threshold_g_per_hour).max(0.0)
        * config.per_carb_g;
    risk += (inputs.effort - config.effort_threshold).max(0.0) * config.per_effort_point;
    risk += (inputs.temperature_c - config.heat_threshold_c).max(0.0) * config.per_degree;
    risk += (config.tolerance_neutral - inputs.gi_tolerance_score).max(0.0)
        * config.per_tolerance_point;
    if inputs.sport.is_gi_sensitive() {
        risk += config.sensitive_sport_bonus;
    }
    round_to(config.bounds.clamp(risk), 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(sport: SportType) -> GiRiskInputs {
        GiRiskInputs {
            carbs_g_per_hour: 60.0,
            effort: 6.0,
            temperature_c: 20.0,
            gi_tolerance_score: 5.0,
            sport,
        }
    }

    #[test]
    fn test_baseline_score() {
        let config = GiRiskConfig::default();
        assert!((gi_risk_score(&inputs(SportType::Cycling), &config) - 2.0).abs() < 1e-9);
        assert!((gi_risk_score(&inputs(SportType::Running), &config) - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_capped() {
        let config = GiRiskConfig::default();
        let extreme = GiRiskInputs {
            carbs_g_per_hour: 130.0,
            effort: 10.0,
            temperature_c: 55.0,
            gi_tolerance_score: 0.0,
            sport: SportType::Hiit,
        };
        assert!((gi_risk_score(&extreme, &config) - 10.0).abs() < 1e-9);
    }
}
