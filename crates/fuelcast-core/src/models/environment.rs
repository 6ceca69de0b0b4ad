// ABOUTME: Environmental conditions model for a session
// ABOUTME: Temperature, humidity, altitude, and terrain difficulty inputs to the load aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

const fn default_terrain_factor() -> f64 {
    1.0
}

/// Conditions the session is performed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentContext {
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity (0-100)
    pub humidity_pct: f64,
    /// Altitude in meters
    pub altitude_m: f64,
    /// Relative terrain difficulty multiplier (0.7-1.8)
    #[serde(default = "default_terrain_factor")]
    pub terrain_factor: f64,
}

impl EnvironmentContext {
    /// Conditions with neutral terrain
    #[must_use]
    pub const fn new(temperature_c: f64, humidity_pct: f64, altitude_m: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            altitude_m,
            terrain_factor: default_terrain_factor(),
        }
    }
}
