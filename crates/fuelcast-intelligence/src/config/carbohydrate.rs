// ABOUTME: Carbohydrate rate model configuration: duration buckets, sport tables, corrections
// ABOUTME: Easy-session guardrail ceilings, GI tolerance correction, and gut capacity limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::curves::{Bounds, FactorCurve, SportTable};

/// Carbohydrate rate model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbohydrateConfig {
    /// Buckets for sessions shorter than `below_hours`, ascending
    pub duration_buckets: Vec<DurationBucket>,
    /// Bucket for sessions at or beyond the last `below_hours`
    pub long_session: CarbBase,
    /// Body mass the base rates are tuned for (kg)
    pub reference_mass_kg: f64,
    /// g/h added per kg above the reference mass
    pub per_kg_offset_g: f64,
    /// Multiplier per sport
    pub sport_multipliers: SportTable<f64>,
    /// Intensity-factor corrections
    pub intensity_factor: IntensityFactorConfig,
    /// Race-day bonus
    pub race_day_multiplier: f64,
    /// Indoor penalty
    pub indoor_multiplier: f64,
    /// GI tolerance correction
    pub gi_tolerance: GiToleranceConfig,
    /// Easy-session guardrail
    pub guardrail: GuardrailConfig,
    /// Gut capacity
    pub gut: GutCapacityConfig,
}

/// Base rate and span for a duration bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbBase {
    /// g/h at zero intensity
    pub base_g_per_hour: f64,
    /// g/h added across the full intensity range
    pub span_g_per_hour: f64,
}

/// Duration bucket, exclusive upper bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationBucket {
    /// Sessions strictly shorter than this (hours) use the bucket
    pub below_hours: f64,
    /// Rate pair
    pub rate: CarbBase,
}

/// Bike/run intensity-factor corrections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityFactorConfig {
    /// Power / bike FTP
    pub bike_power: FactorCurve,
    /// Power / run FTP
    pub run_power: FactorCurve,
    /// Heart rate / LT2
    pub lt2_heart_rate: FactorCurve,
}

/// `clamp(1 - (neutral - tolerance) * per_point)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiToleranceConfig {
    /// Tolerance with no correction
    pub neutral_score: f64,
    /// Correction per tolerance point
    pub per_point: f64,
    /// Allowed correction range
    pub bounds: Bounds,
}

/// Caps easy, short, non-race sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailConfig {
    /// Highest effort treated as easy
    pub max_effort: f64,
    /// Longest session treated as short (hours)
    pub max_hours: f64,
    /// Ceiling per sport (g/h)
    pub ceilings_g_per_hour: SportTable<f64>,
}

/// Absorption ceiling and final clamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GutCapacityConfig {
    /// Untrained capacity (g/h)
    pub base_capacity_g_per_hour: f64,
    /// Capacity added per gut training level
    pub per_training_level_g: f64,
    /// Lowest rate ever recommended (g/h)
    pub floor_g_per_hour: f64,
    /// Highest rate ever recommended (g/h)
    pub hard_cap_g_per_hour: f64,
}

impl Default for CarbohydrateConfig {
    fn default() -> Self {
        Self {
            duration_buckets: vec![
                DurationBucket {
                    below_hours: 1.0,
                    rate: CarbBase::new(12.0, 24.0),
                },
                DurationBucket {
                    below_hours: 2.0,
                    rate: CarbBase::new(18.0, 34.0),
                },
                DurationBucket {
                    below_hours: 3.5,
                    rate: CarbBase::new(25.0, 48.0),
                },
            ],
            long_session: CarbBase::new(35.0, 60.0),
            reference_mass_kg: 70.0,
            per_kg_offset_g: 0.12,
            sport_multipliers: SportTable {
                running: 1.08,
                cycling: 1.0,
                swimming: 0.98,
                hiking: 0.85,
                trail_running: 1.15,
                gym: 0.7,
                hiit: 0.9,
                hyrox: 1.1,
            },
            intensity_factor: IntensityFactorConfig::default(),
            race_day_multiplier: 1.08,
            indoor_multiplier: 0.97,
            gi_tolerance: GiToleranceConfig::default(),
            guardrail: GuardrailConfig::default(),
            gut: GutCapacityConfig::default(),
        }
    }
}

impl CarbBase {
    /// Rate pair
    #[must_use]
    pub const fn new(base_g_per_hour: f64, span_g_per_hour: f64) -> Self {
        Self {
            base_g_per_hour,
            span_g_per_hour,
        }
    }
}

impl Default for IntensityFactorConfig {
    fn default() -> Self {
        Self {
            bike_power: FactorCurve::new(0.9, 0.28, 0.88, 1.3),
            run_power: FactorCurve::new(0.9, 0.24, 0.88, 1.26),
            lt2_heart_rate: FactorCurve::new(0.92, 0.16, 0.9, 1.18),
        }
    }
}

impl Default for GiToleranceConfig {
    fn default() -> Self {
        Self {
            neutral_score: 5.0,
            per_point: 0.03,
            bounds: Bounds::new(0.8, 1.15),
        }
    }
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            max_effort: 4.4,
            max_hours: 2.6,
            ceilings_g_per_hour: SportTable {
                running: 60.0,
                cycling: 65.0,
                swimming: 55.0,
                hiking: 55.0,
                trail_running: 65.0,
                gym: 45.0,
                hiit: 55.0,
                hyrox: 65.0,
            },
        }
    }
}

impl Default for GutCapacityConfig {
    fn default() -> Self {
        Self {
            base_capacity_g_per_hour: 70.0,
            per_training_level_g: 5.5,
            floor_g_per_hour: 25.0,
            hard_cap_g_per_hour: 140.0,
        }
    }
}
