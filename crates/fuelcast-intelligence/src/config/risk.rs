// ABOUTME: GI risk and confidence estimator configuration
// ABOUTME: Risk increments per stressor and uncertainty penalties per missing input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::curves::Bounds;

/// GI distress risk heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiRiskConfig {
    /// Starting score
    pub base_score: f64,
    /// Carb rate above which density adds risk (g/h)
    pub carb_threshold_g_per_hour: f64,
    /// Risk per g/h above the threshold
    pub per_carb_g: f64,
    /// Effort above which intensity adds risk
    pub effort_threshold: f64,
    /// Risk per effort point above the threshold
    pub per_effort_point: f64,
    /// Temperature above which heat adds risk (°C)
    pub heat_threshold_c: f64,
    /// Risk per degree above the threshold
    pub per_degree: f64,
    /// Tolerance below which risk is added
    pub tolerance_neutral: f64,
    /// Risk per tolerance point below neutral
    pub per_tolerance_point: f64,
    /// Flat risk for running, trail running, Hyrox, and HIIT
    pub sensitive_sport_bonus: f64,
    /// Score range
    pub bounds: Bounds,
}

/// Confidence band configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Uncertainty with every optional input present
    pub base_uncertainty: f64,
    /// Penalty when `VO2max` is missing
    pub missing_vo2max: f64,
    /// Penalty when lactate threshold is missing
    pub missing_lactate_threshold: f64,
    /// Penalty when sleep is missing
    pub missing_sleep: f64,
    /// Penalty when HRV is missing
    pub missing_hrv: f64,
    /// Penalty when neither heart-rate nor power telemetry is present
    pub missing_telemetry: f64,
    /// Penalty when neither FTP is known
    pub missing_ftp: f64,
    /// Band center in science mode
    pub science_center: f64,
    /// Band center otherwise
    pub standard_center: f64,
    /// Range of the lower bound
    pub low_bounds: Bounds,
    /// Range of the upper bound
    pub high_bounds: Bounds,
}

impl Default for GiRiskConfig {
    fn default() -> Self {
        Self {
            base_score: 2.0,
            carb_threshold_g_per_hour: 65.0,
            per_carb_g: 0.025,
            effort_threshold: 7.0,
            per_effort_point: 0.5,
            heat_threshold_c: 25.0,
            per_degree: 0.08,
            tolerance_neutral: 5.0,
            per_tolerance_point: 0.55,
            sensitive_sport_bonus: 0.8,
            bounds: Bounds::new(0.0, 10.0),
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            base_uncertainty: 0.13,
            missing_vo2max: 0.04,
            missing_lactate_threshold: 0.03,
            missing_sleep: 0.02,
            missing_hrv: 0.02,
            missing_telemetry: 0.03,
            missing_ftp: 0.02,
            science_center: 0.79,
            standard_center: 0.73,
            low_bounds: Bounds::new(0.4, 0.95),
            high_bounds: Bounds::new(0.45, 0.99),
        }
    }
}
