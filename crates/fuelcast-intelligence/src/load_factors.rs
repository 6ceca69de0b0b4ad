// ABOUTME: Load factor aggregator combining environment and telemetry adjustments
// ABOUTME: Each factor is clamped independently and emits one rationale note when applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::{EnvironmentContext, SessionContext};
use tracing::debug;

use crate::config::{EnvironmentLoadConfig, LoadFactorConfig};

/// Combined load multiplier and how it was built
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFactors {
    /// Heat x humidity x altitude x terrain
    pub environment: f64,
    /// Product of the telemetry factors that applied (1.0 when none did)
    pub telemetry: f64,
    /// Notes, one per applied factor
    pub notes: Vec<String>,
}

impl LoadFactors {
    /// Environment and telemetry multiplied together
    #[must_use]
    pub fn combined(&self) -> f64 {
        self.environment * self.telemetry
    }
}

/// `heat x humidity x altitude x terrain`
#[must_use]
pub fn environment_factor(environment: &EnvironmentContext, config: &EnvironmentLoadConfig) -> f64 {
    let heat = 1.0
        + ((environment.temperature_c - config.heat_threshold_c) * config.heat_per_degree).max(0.0);
    let humidity = 1.0
        + ((environment.humidity_pct - config.humidity_threshold_pct) * config.humidity_per_pct)
            .max(0.0);
    let altitude = 1.0
        + ((environment.altitude_m - config.altitude_threshold_m) * config.altitude_per_m).max(0.0);
    heat * humidity * altitude * environment.terrain_factor
}

/// Aggregate every applicable load factor for the session
#[must_use]
pub fn aggregate(
    session: &SessionContext,
    environment: &EnvironmentContext,
    config: &LoadFactorConfig,
) -> LoadFactors {
    let environment_load = environment_factor(environment, &config.environment);
    let mut notes = vec![format!(
        "Environment load factor {environment_load:.3} from {:.1} °C, {:.0}% humidity, {:.0} m altitude, terrain x{:.2}.",
        environment.temperature_c,
        environment.humidity_pct,
        environment.altitude_m,
        environment.terrain_factor
    )];
    let mut telemetry = 1.0;

    if let (Some(hr), Some(max_hr)) = (session.effective_heart_rate(), session.max_heart_rate()) {
        telemetry *= config.heart_rate_ratio.apply(hr / max_hr);
        notes.push("Heart-rate load factor applied from effective/max HR.".to_owned());
    }

    if let Some(power) = session.effective_power() {
        telemetry *= config.power.apply(power / config.power_reference_watts);
        notes.push("Power-based load factor applied from effective power.".to_owned());
    }

    if let (Some(np), Some(ap)) = (
        session.normalized_power_watts.filter(|w| *w > 0.0),
        session.avg_power_watts.filter(|w| *w > 0.0),
    ) {
        let variability = np / ap.max(1.0);
        telemetry *= config.power_variability.apply(variability - 1.0);
        notes.push("Power variability adjustment applied (NP/AP ratio).".to_owned());
    }

    let hours = session.duration_hours();
    if let Some(distance) = session.distance_km.filter(|km| *km > 0.0) {
        if hours > 0.0 {
            telemetry *= config.pace.apply(distance / hours);
            notes.push("Speed/pace load factor applied from distance and duration.".to_owned());
        }
    }

    if let Some(gain) = session.elevation_gain_m.filter(|m| *m > 0.0) {
        let vertical_rate = gain / f64::from(session.duration_minutes.max(1));
        telemetry *= config.elevation.apply(vertical_rate);
        notes.push("Elevation stress adjustment applied.".to_owned());
    }

    debug!(
        sport = %session.sport,
        environment = environment_load,
        telemetry,
        "Load factors aggregated"
    );

    LoadFactors {
        environment: environment_load,
        telemetry,
        notes,
    }
}
