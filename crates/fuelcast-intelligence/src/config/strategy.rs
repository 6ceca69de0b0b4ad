// ABOUTME: Strategy generator and fueling schedule configuration
// ABOUTME: Named carb multipliers, pre/post carbohydrate loading, and slot length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::StrategyType;
use serde::{Deserialize, Serialize};

use super::curves::Bounds;

/// Strategy generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Carb multiplier for the conservative strategy
    pub conservative_multiplier: f64,
    /// Carb multiplier for the balanced strategy
    pub balanced_multiplier: f64,
    /// Carb multiplier for the aggressive strategy
    pub aggressive_multiplier: f64,
    /// Range of every strategy's carb rate (g/h)
    pub carb_bounds: Bounds,
    /// Extra fluid multiplier for the conservative strategy
    pub conservative_hydration_multiplier: f64,
    /// Pre-workout g/kg in science mode
    pub science_pre_carbs_per_kg: f64,
    /// Pre-workout g/kg otherwise
    pub standard_pre_carbs_per_kg: f64,
    /// Range of pre-workout carbs (g)
    pub pre_carbs_bounds: Bounds,
    /// Post-workout g/kg
    pub post_carbs_per_kg: f64,
    /// Range of post-workout carbs (g)
    pub post_carbs_bounds: Bounds,
}

impl StrategyConfig {
    /// Carb multiplier for `strategy`
    #[must_use]
    pub const fn multiplier(&self, strategy: StrategyType) -> f64 {
        match strategy {
            StrategyType::Conservative => self.conservative_multiplier,
            StrategyType::Balanced => self.balanced_multiplier,
            StrategyType::Aggressive => self.aggressive_multiplier,
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            conservative_multiplier: 0.88,
            balanced_multiplier: 1.0,
            aggressive_multiplier: 1.12,
            carb_bounds: Bounds::new(20.0, 130.0),
            conservative_hydration_multiplier: 0.96,
            science_pre_carbs_per_kg: 1.1,
            standard_pre_carbs_per_kg: 0.85,
            pre_carbs_bounds: Bounds::new(30.0, 170.0),
            post_carbs_per_kg: 1.0,
            post_carbs_bounds: Bounds::new(25.0, 140.0),
        }
    }
}

/// Fueling schedule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Slot length (minutes)
    pub slot_minutes: u32,
    /// Weight of carb deviation in food matching
    pub carb_weight: f64,
    /// Weight of fluid deviation in food matching
    pub fluid_weight: f64,
    /// Weight of sodium deviation in food matching
    pub sodium_weight: f64,
}

impl ScheduleConfig {
    /// Slots per hour, used to split hourly rates into slot shares
    #[must_use]
    pub fn slots_per_hour(&self) -> f64 {
        60.0 / f64::from(self.slot_minutes.max(1))
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 15,
            carb_weight: 1.8,
            fluid_weight: 0.01,
            sodium_weight: 0.003,
        }
    }
}
