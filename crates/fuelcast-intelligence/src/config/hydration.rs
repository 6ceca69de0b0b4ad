// ABOUTME: Hydration and sodium model configuration
// ABOUTME: Sweat-rate defaults, intensity/heat/humidity/heart-rate increments, and clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::curves::Bounds;

/// Fluid model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Sweat rate when the profile has none (L/h)
    pub default_sweat_rate_l_h: f64,
    /// Effort at which no intensity adjustment applies
    pub effort_pivot: f64,
    /// ml/h per effort point above (or below) the pivot
    pub per_effort_ml: f64,
    /// Temperature above which heat adds fluid (°C)
    pub heat_threshold_c: f64,
    /// ml/h per degree above the threshold
    pub per_degree_ml: f64,
    /// Humidity above which fluid is added (%)
    pub humidity_threshold_pct: f64,
    /// ml/h per humidity point above the threshold
    pub per_humidity_pct_ml: f64,
    /// Flat ml/h for endurance sports
    pub endurance_bonus_ml: f64,
    /// Heart rate above which fluid is added (bpm)
    pub heart_rate_threshold_bpm: f64,
    /// ml/h per bpm above the threshold
    pub per_bpm_ml: f64,
    /// Allowed range (ml/h)
    pub bounds: Bounds,
    /// Sodium model
    pub sodium: SodiumConfig,
}

/// Sodium model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SodiumConfig {
    /// Sweat sodium concentration when the profile has none (mg/L)
    pub default_loss_mg_l: f64,
    /// Temperature above which sodium is inflated (°C)
    pub heat_threshold_c: f64,
    /// Fractional inflation per degree above the threshold
    pub per_degree_fraction: f64,
    /// Allowed range (mg/h)
    pub bounds: Bounds,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            default_sweat_rate_l_h: 0.9,
            effort_pivot: 5.0,
            per_effort_ml: 45.0,
            heat_threshold_c: 16.0,
            per_degree_ml: 18.0,
            humidity_threshold_pct: 50.0,
            per_humidity_pct_ml: 3.0,
            endurance_bonus_ml: 60.0,
            heart_rate_threshold_bpm: 145.0,
            per_bpm_ml: 1.1,
            bounds: Bounds::new(350.0, 1300.0),
            sodium: SodiumConfig::default(),
        }
    }
}

impl Default for SodiumConfig {
    fn default() -> Self {
        Self {
            default_loss_mg_l: 850.0,
            heat_threshold_c: 24.0,
            per_degree_fraction: 0.01,
            bounds: Bounds::new(300.0, 1800.0),
        }
    }
}
