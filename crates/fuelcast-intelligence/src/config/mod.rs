// ABOUTME: Fueling engine configuration: every tunable constant of the prediction pipeline
// ABOUTME: Process-wide instance with FUELING_* environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fueling engine configuration.
//!
//! Defaults reproduce the engine's calibrated constants. A handful of
//! operationally relevant values can be overridden through `FUELING_*`
//! environment variables; the result is validated before use.

/// Clamp bounds, factor curves, and per-sport tables
pub mod curves;

/// Carbohydrate rate model
pub mod carbohydrate;
/// Configuration errors
pub mod error;
/// Fluid and sodium
pub mod hydration;
/// Intensity normalizer
pub mod intensity;
/// Load factor aggregator
pub mod load;
/// GI risk and confidence
pub mod risk;
/// Strategies and schedule
pub mod strategy;

pub use carbohydrate::{
    CarbBase, CarbohydrateConfig, DurationBucket, GiToleranceConfig, GuardrailConfig,
    GutCapacityConfig, IntensityFactorConfig,
};
pub use curves::{Bounds, FactorCurve, IntensityBand, SportTable};
pub use error::ConfigError;
pub use hydration::{HydrationConfig, SodiumConfig};
pub use intensity::{HeartRateIntensityConfig, IntensityConfig};
pub use load::{EnvironmentLoadConfig, LoadFactorConfig};
pub use risk::{ConfidenceConfig, GiRiskConfig};
pub use strategy::{ScheduleConfig, StrategyConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static FUELING_CONFIG: OnceLock<FuelingConfig> = OnceLock::new();

/// Override for [`GutCapacityConfig::hard_cap_g_per_hour`]
pub const ENV_CARB_HARD_CAP: &str = "FUELING_CARB_HARD_CAP_G_PER_HOUR";
/// Override for [`GutCapacityConfig::base_capacity_g_per_hour`]
pub const ENV_GUT_BASE_CAPACITY: &str = "FUELING_GUT_BASE_CAPACITY_G_PER_HOUR";
/// Override for [`HydrationConfig::default_sweat_rate_l_h`]
pub const ENV_DEFAULT_SWEAT_RATE: &str = "FUELING_DEFAULT_SWEAT_RATE_L_H";
/// Override for [`SodiumConfig::default_loss_mg_l`]
pub const ENV_DEFAULT_SODIUM_LOSS: &str = "FUELING_DEFAULT_SODIUM_LOSS_MG_L";
/// Override for [`ScheduleConfig::slot_minutes`]
pub const ENV_SLOT_MINUTES: &str = "FUELING_SCHEDULE_SLOT_MINUTES";

/// Main fueling engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelingConfig {
    /// Intensity normalizer
    pub intensity: IntensityConfig,
    /// Load factor aggregator
    pub load_factors: LoadFactorConfig,
    /// Carbohydrate rate model
    pub carbohydrate: CarbohydrateConfig,
    /// Fluid and sodium models
    pub hydration: HydrationConfig,
    /// GI risk scorer
    pub gi_risk: GiRiskConfig,
    /// Confidence estimator
    pub confidence: ConfidenceConfig,
    /// Strategy generator
    pub strategy: StrategyConfig,
    /// Fueling scheduler
    pub schedule: ScheduleConfig,
}

impl FuelingConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once; invalid overrides are logged and the defaults used instead.
    pub fn global() -> &'static Self {
        FUELING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load fueling config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_intensity()?;
        self.validate_carbohydrate()?;
        self.validate_outputs()?;
        self.validate_strategy()
    }

    fn validate_intensity(&self) -> Result<(), ConfigError> {
        let intensity = &self.intensity;
        if !intensity.effort_bounds.is_ordered() {
            return Err(ConfigError::InvalidRange("effort bounds must be ordered"));
        }
        if intensity.power_bands.is_empty() || intensity.pace_bands.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "power and pace bands must not be empty",
            ));
        }
        if !bands_ascending(&intensity.power_bands) {
            return Err(ConfigError::InvalidRange("power bands must be ascending"));
        }
        if !bands_ascending(&intensity.pace_bands) {
            return Err(ConfigError::InvalidRange("pace bands must be ascending"));
        }
        let hr = &intensity.heart_rate;
        if hr.floor_fraction_of_lt1 <= 0.0 || hr.floor_fraction_of_lt1 >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "heart-rate floor must be a fraction of LT1 in (0, 1)",
            ));
        }
        if hr.implicit_max_over_lt2 <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "implicit max HR must exceed LT2",
            ));
        }
        let curves = [
            self.load_factors.heart_rate_ratio,
            self.load_factors.power,
            self.load_factors.power_variability,
            self.load_factors.pace,
            self.load_factors.elevation,
        ];
        if curves.iter().any(|curve| !curve.bounds.is_ordered()) {
            return Err(ConfigError::InvalidRange("load factor bounds must be ordered"));
        }
        if self.load_factors.power_reference_watts <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "power reference must be positive",
            ));
        }
        Ok(())
    }

    fn validate_carbohydrate(&self) -> Result<(), ConfigError> {
        let carbs = &self.carbohydrate;
        let ascending = carbs
            .duration_buckets
            .windows(2)
            .all(|pair| pair[0].below_hours < pair[1].below_hours);
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "duration buckets must be ascending",
            ));
        }
        if carbs.sport_multipliers.values().any(|m| m <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "sport multipliers must be positive",
            ));
        }
        let factors = &carbs.intensity_factor;
        let ordered = [
            factors.bike_power.bounds,
            factors.run_power.bounds,
            factors.lt2_heart_rate.bounds,
            carbs.gi_tolerance.bounds,
        ]
        .iter()
        .all(Bounds::is_ordered);
        if !ordered {
            return Err(ConfigError::InvalidRange(
                "carbohydrate correction bounds must be ordered",
            ));
        }
        let gut = &carbs.gut;
        if gut.floor_g_per_hour <= 0.0 || gut.floor_g_per_hour > gut.hard_cap_g_per_hour {
            return Err(ConfigError::InvalidRange(
                "carb floor must be positive and at most the hard cap",
            ));
        }
        if gut.base_capacity_g_per_hour <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "gut base capacity must be positive",
            ));
        }
        Ok(())
    }

    fn validate_outputs(&self) -> Result<(), ConfigError> {
        let hydration = &self.hydration;
        if !hydration.bounds.is_ordered() || !hydration.sodium.bounds.is_ordered() {
            return Err(ConfigError::InvalidRange(
                "hydration and sodium bounds must be ordered",
            ));
        }
        if hydration.default_sweat_rate_l_h <= 0.0 || hydration.sodium.default_loss_mg_l <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default sweat rate and sodium loss must be positive",
            ));
        }
        if !self.gi_risk.bounds.is_ordered() {
            return Err(ConfigError::InvalidRange("GI risk bounds must be ordered"));
        }
        let confidence = &self.confidence;
        if !confidence.low_bounds.is_ordered() || !confidence.high_bounds.is_ordered() {
            return Err(ConfigError::InvalidRange(
                "confidence bounds must be ordered",
            ));
        }
        if confidence.low_bounds.max > confidence.high_bounds.max
            || confidence.low_bounds.min > confidence.high_bounds.min
        {
            return Err(ConfigError::InvalidRange(
                "confidence low bounds must sit below high bounds",
            ));
        }
        Ok(())
    }

    fn validate_strategy(&self) -> Result<(), ConfigError> {
        let strategy = &self.strategy;
        if strategy.conservative_multiplier <= 0.0
            || strategy.conservative_multiplier > strategy.balanced_multiplier
            || strategy.balanced_multiplier > strategy.aggressive_multiplier
        {
            return Err(ConfigError::InvalidMultipliers(
                "strategy multipliers must satisfy 0 < conservative <= balanced <= aggressive",
            ));
        }
        let ordered = [
            strategy.carb_bounds,
            strategy.pre_carbs_bounds,
            strategy.post_carbs_bounds,
        ]
        .iter()
        .all(Bounds::is_ordered);
        if !ordered {
            return Err(ConfigError::InvalidRange("strategy bounds must be ordered"));
        }
        if self.schedule.slot_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "schedule slot length must be positive",
            ));
        }
        Ok(())
    }

    /// Helper to apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            ENV_CARB_HARD_CAP,
            &mut self.carbohydrate.gut.hard_cap_g_per_hour,
        )?;
        Self::apply_env_var(
            ENV_GUT_BASE_CAPACITY,
            &mut self.carbohydrate.gut.base_capacity_g_per_hour,
        )?;
        Self::apply_env_var(
            ENV_DEFAULT_SWEAT_RATE,
            &mut self.hydration.default_sweat_rate_l_h,
        )?;
        Self::apply_env_var(
            ENV_DEFAULT_SODIUM_LOSS,
            &mut self.hydration.sodium.default_loss_mg_l,
        )?;
        Self::apply_env_var(ENV_SLOT_MINUTES, &mut self.schedule.slot_minutes)?;
        Ok(self)
    }
}

fn bands_ascending(bands: &[IntensityBand]) -> bool {
    bands
        .iter()
        .all(|band| band.ratio_low < band.ratio_high && band.effort_low <= band.effort_high)
        && bands
            .windows(2)
            .all(|pair| pair[0].ratio_high <= pair[1].ratio_low + f64::EPSILON)
}
