// ABOUTME: Intensity normalizer configuration for heart-rate, power, and pace effort mapping
// ABOUTME: Threshold-segment efforts, max-HR fallback, and ratio bands for power and pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::curves::{Bounds, IntensityBand};

/// Intensity normalizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Range of the canonical effort scale
    pub effort_bounds: Bounds,
    /// Heart-rate segment mapping
    pub heart_rate: HeartRateIntensityConfig,
    /// Power / FTP ratio bands, ascending
    pub power_bands: Vec<IntensityBand>,
    /// Threshold pace / target pace ratio bands, ascending
    pub pace_bands: Vec<IntensityBand>,
}

/// Heart-rate effort mapping between lactate landmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateIntensityConfig {
    /// Implicit floor of the first segment, as a fraction of LT1
    pub floor_fraction_of_lt1: f64,
    /// Implicit max HR as a multiple of LT2 when no max HR is recorded
    pub implicit_max_over_lt2: f64,
    /// Effort range from the floor to LT1
    pub below_lt1_effort: (f64, f64),
    /// Effort range from LT1 to LT2
    pub lt1_to_lt2_effort: (f64, f64),
    /// Effort range from LT2 to max HR
    pub above_lt2_effort: (f64, f64),
    /// HR / max-HR fallback band when landmarks are missing
    pub max_hr_band: IntensityBand,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            effort_bounds: Bounds::new(1.0, 10.0),
            heart_rate: HeartRateIntensityConfig::default(),
            power_bands: vec![
                IntensityBand::new(0.4, 0.6, 2.5, 3.8),
                IntensityBand::new(0.6, 0.75, 3.8, 5.0),
                IntensityBand::new(0.75, 0.9, 5.0, 6.8),
                IntensityBand::new(0.9, 1.05, 6.8, 8.4),
                IntensityBand::new(1.05, 1.2, 8.4, 9.7),
            ],
            pace_bands: vec![
                IntensityBand::new(0.7, 0.85, 2.5, 4.0),
                IntensityBand::new(0.85, 1.0, 4.0, 7.0),
                IntensityBand::new(1.0, 1.15, 7.0, 9.5),
            ],
        }
    }
}

impl Default for HeartRateIntensityConfig {
    fn default() -> Self {
        Self {
            floor_fraction_of_lt1: 0.7,
            implicit_max_over_lt2: 1.1,
            below_lt1_effort: (2.5, 4.0),
            lt1_to_lt2_effort: (4.0, 7.2),
            above_lt2_effort: (7.2, 9.5),
            max_hr_band: IntensityBand::new(0.55, 0.95, 3.0, 9.2),
        }
    }
}
