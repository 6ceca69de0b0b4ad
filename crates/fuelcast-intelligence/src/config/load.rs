// ABOUTME: Load factor configuration for environment and telemetry adjustments
// ABOUTME: Heat/humidity/altitude coefficients and clamped curves for HR, power, pace, elevation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::curves::FactorCurve;

/// Load factor aggregator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadFactorConfig {
    /// Environment coefficients
    pub environment: EnvironmentLoadConfig,
    /// Effective HR / max HR
    pub heart_rate_ratio: FactorCurve,
    /// Effective power / `power_reference_watts`
    pub power: FactorCurve,
    /// Reference power the power curve is scaled against (W)
    pub power_reference_watts: f64,
    /// Normalized power / average power, minus one
    pub power_variability: FactorCurve,
    /// Speed in km/h
    pub pace: FactorCurve,
    /// Climbing rate in m/min
    pub elevation: FactorCurve,
}

/// Heat, humidity, and altitude load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentLoadConfig {
    /// Temperature above which heat adds load (°C)
    pub heat_threshold_c: f64,
    /// Load per degree above the threshold
    pub heat_per_degree: f64,
    /// Humidity above which load is added (%)
    pub humidity_threshold_pct: f64,
    /// Load per humidity point above the threshold
    pub humidity_per_pct: f64,
    /// Altitude above which load is added (m)
    pub altitude_threshold_m: f64,
    /// Load per metre above the threshold
    pub altitude_per_m: f64,
}

impl Default for LoadFactorConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentLoadConfig::default(),
            heart_rate_ratio: FactorCurve::new(0.92, 0.26, 0.88, 1.12),
            power: FactorCurve::new(0.9, 0.25, 0.88, 1.15),
            power_reference_watts: 300.0,
            power_variability: FactorCurve::new(0.95, 0.5, 0.9, 1.1),
            pace: FactorCurve::new(0.95, 0.02, 0.9, 1.1),
            elevation: FactorCurve::new(1.0, 0.01, 1.0, 1.16),
        }
    }
}

impl Default for EnvironmentLoadConfig {
    fn default() -> Self {
        Self {
            heat_threshold_c: 18.0,
            heat_per_degree: 0.008,
            humidity_threshold_pct: 55.0,
            humidity_per_pct: 0.002,
            altitude_threshold_m: 500.0,
            altitude_per_m: 0.00006,
        }
    }
}
