// ABOUTME: Building blocks shared by the fueling configuration groups
// ABOUTME: Clamp bounds, linear factor curves, interpolation bands, and per-sport tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::SportType;
use serde::{Deserialize, Serialize};

/// Inclusive clamp range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Bounds {
    /// Bounds from a pair
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range
    ///
    /// Never panics: a NaN input lands on `min`, and inverted bounds resolve to `max`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// True when `min <= max` and both are finite
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// True when `value` lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// `clamp(base + input * slope)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorCurve {
    /// Factor at zero input
    pub base: f64,
    /// Factor change per unit of input
    pub slope: f64,
    /// Allowed factor range
    pub bounds: Bounds,
}

impl FactorCurve {
    /// Curve from its coefficients
    #[must_use]
    pub const fn new(base: f64, slope: f64, min: f64, max: f64) -> Self {
        Self {
            base,
            slope,
            bounds: Bounds::new(min, max),
        }
    }

    /// Evaluate the curve at `input`
    #[must_use]
    pub fn apply(&self, input: f64) -> f64 {
        self.bounds.clamp(self.slope.mul_add(input, self.base))
    }
}

/// Maps a ratio range linearly onto an effort range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityBand {
    /// Ratio at the start of the band
    pub ratio_low: f64,
    /// Ratio at the end of the band
    pub ratio_high: f64,
    /// Effort at `ratio_low`
    pub effort_low: f64,
    /// Effort at `ratio_high`
    pub effort_high: f64,
}

impl IntensityBand {
    /// Band from its corners
    #[must_use]
    pub const fn new(ratio_low: f64, ratio_high: f64, effort_low: f64, effort_high: f64) -> Self {
        Self {
            ratio_low,
            ratio_high,
            effort_low,
            effort_high,
        }
    }
}

/// One value per sport; lookups are exhaustive over [`SportType`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportTable<T> {
    /// Running
    pub running: T,
    /// Cycling
    pub cycling: T,
    /// Swimming
    pub swimming: T,
    /// Hiking
    pub hiking: T,
    /// Trail running
    pub trail_running: T,
    /// Gym
    pub gym: T,
    /// HIIT
    pub hiit: T,
    /// Hyrox
    pub hyrox: T,
}

impl<T: Copy> SportTable<T> {
    /// Value for `sport`
    #[must_use]
    pub fn get(&self, sport: SportType) -> T {
        match sport {
            SportType::Running => self.running,
            SportType::Cycling => self.cycling,
            SportType::Swimming => self.swimming,
            SportType::Hiking => self.hiking,
            SportType::TrailRunning => self.trail_running,
            SportType::Gym => self.gym,
            SportType::Hiit => self.hiit,
            SportType::Hyrox => self.hyrox,
        }
    }

    /// Iterate over every sport's value
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        SportType::ALL.into_iter().map(|sport| self.get(sport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_clamp_handles_nan() {
        let bounds = Bounds::new(1.0, 10.0);
        assert!((bounds.clamp(f64::NAN) - 1.0).abs() < f64::EPSILON);
        assert!((bounds.clamp(12.0) - 10.0).abs() < f64::EPSILON);
        assert!((bounds.clamp(-3.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factor_curve_clamps() {
        let curve = FactorCurve::new(0.9, 0.25, 0.88, 1.15);
        assert!((curve.apply(0.0) - 0.9).abs() < 1e-12);
        assert!((curve.apply(10.0) - 1.15).abs() < 1e-12);
    }
}
