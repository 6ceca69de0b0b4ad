// ABOUTME: Simulation comparator: perturbs a request and summarizes balanced-strategy deltas
// ABOUTME: Hotter, longer, or harder what-if scenarios with signed human-readable lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::{PredictionRequest, SimulationRequest, StrategyDelta};

use crate::config::Bounds;

/// Copy of the base request with the what-if deltas applied
///
/// Duration never drops below zero; perceived exertion stays inside `effort_bounds`.
#[must_use]
pub fn perturb(simulation: &SimulationRequest, effort_bounds: Bounds) -> PredictionRequest {
    let mut request = simulation.base_request.clone();
    request.environment.temperature_c += simulation.hotter_by_c;
    request.session.duration_minutes = request
        .session
        .duration_minutes
        .saturating_add_signed(simulation.longer_by_minutes);
    request.session.intensity_rpe =
        effort_bounds.clamp(request.session.intensity_rpe + simulation.intensity_delta_rpe);
    request
}

/// Signed summary lines for a delta
#[must_use]
pub fn summarize(delta: &StrategyDelta) -> Vec<String> {
    vec![
        format!("Carbs/h change: {:+.1} g/h", delta.carbs_g_per_hour),
        format!("Hydration change: {:+.0} ml/h", delta.hydration_ml_per_hour),
        format!("Sodium change: {:+.0} mg/h", delta.sodium_mg_per_hour),
        format!("GI risk change: {:+.2}", delta.gi_risk_score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelcast_core::models::{
        AthleteProfile, EnvironmentContext, SessionContext, SportType,
    };

    fn simulation(longer_by_minutes: i32, intensity_delta_rpe: f64) -> SimulationRequest {
        SimulationRequest {
            base_request: PredictionRequest {
                profile: AthleteProfile::with_body_mass(70.0),
                session: SessionContext::new(SportType::Running, 30, 9.0),
                environment: EnvironmentContext::new(20.0, 50.0, 0.0),
                science_mode: true,
                selected_food_ids: Vec::new(),
            },
            hotter_by_c: 5.0,
            longer_by_minutes,
            intensity_delta_rpe,
        }
    }

    #[test]
    fn test_perturb_saturates_and_clamps() {
        let perturbed = perturb(&simulation(-90, 3.0), Bounds::new(1.0, 10.0));
        assert_eq!(perturbed.session.duration_minutes, 0);
        assert!((perturbed.session.intensity_rpe - 10.0).abs() < f64::EPSILON);
        assert!((perturbed.environment.temperature_c - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_has_explicit_signs() {
        let delta = StrategyDelta {
            carbs_g_per_hour: 3.24,
            hydration_ml_per_hour: 54.0,
            sodium_mg_per_hour: 0.0,
            gi_risk_score: -0.1,
        };
        assert_eq!(
            summarize(&delta),
            vec![
                "Carbs/h change: +3.2 g/h",
                "Hydration change: +54 ml/h",
                "Sodium change: +0 mg/h",
                "GI risk change: -0.10",
            ]
        );
    }
}
