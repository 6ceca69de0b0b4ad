// ABOUTME: Hydration and sodium model producing per-hour fluid and sodium targets
// ABOUTME: Sweat rate plus intensity, heat, humidity, sport, and heart-rate increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::{AthleteProfile, EnvironmentContext, SessionContext};

use crate::config::{HydrationConfig, SodiumConfig};

/// Fluid target (ml/h), clamped
#[must_use]
pub fn hydration_ml_per_hour(
    session: &SessionContext,
    profile: &AthleteProfile,
    environment: &EnvironmentContext,
    effort: f64,
    config: &HydrationConfig,
) -> f64 {
    let sweat_l_h = profile
        .sweat_rate_l_h
        .filter(|l| *l > 0.0)
        .unwrap_or(config.default_sweat_rate_l_h);

    let mut fluid = sweat_l_h * 1000.0;
    fluid += (effort - config.effort_pivot) * config.per_effort_ml;
    fluid += (environment.temperature_c - config.heat_threshold_c).max(0.0) * config.per_degree_ml;
    fluid += (environment.humidity_pct - config.humidity_threshold_pct).max(0.0)
        * config.per_humidity_pct_ml;
    if session.sport.is_endurance() {
        fluid += config.endurance_bonus_ml;
    }
    if let Some(hr) = session.effective_heart_rate() {
        fluid += (hr - config.heart_rate_threshold_bpm).max(0.0) * config.per_bpm_ml;
    }
    config.bounds.clamp(fluid)
}

/// Sodium target (mg/h) for a fluid target, clamped
#[must_use]
pub fn sodium_mg_per_hour(
    hydration_ml_per_hour: f64,
    profile: &AthleteProfile,
    environment: &EnvironmentContext,
    config: &SodiumConfig,
) -> f64 {
    let loss_mg_l = profile
        .sodium_loss_mg_l
        .filter(|mg| *mg > 0.0)
        .unwrap_or(config.default_loss_mg_l);
    let heat = 1.0 + (environment.temperature_c - config.heat_threshold_c).max(0.0)
        * config.per_degree_fraction;
    config
        .bounds
        .clamp(hydration_ml_per_hour / 1000.0 * loss_mg_l * heat)
}
