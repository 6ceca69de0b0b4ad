// ABOUTME: Session context model with intensity mode, targets, and optional telemetry
// ABOUTME: Provides effective heart-rate/power signals and duration helpers for the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::sport::SportType;

/// How the caller expressed session intensity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityMode {
    /// Perceived exertion on the 1-10 scale
    #[default]
    Rpe,
    /// Target heart rate
    Hr,
    /// Target power
    Power,
    /// Target pace
    Pace,
}

/// Whether the session is being planned or analysed after the fact
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Upcoming session
    #[default]
    Planned,
    /// Session already done; telemetry describes what happened
    Completed,
}

/// A single training or race session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Sport
    pub sport: SportType,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Perceived exertion (1-10); always present as the normalizer fallback
    pub intensity_rpe: f64,
    /// Which signal expresses the intended intensity
    #[serde(default)]
    pub intensity_mode: IntensityMode,
    /// Target heart rate for [`IntensityMode::Hr`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_heart_rate_bpm: Option<f64>,
    /// Target power for [`IntensityMode::Power`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_power_watts: Option<f64>,
    /// Target pace for [`IntensityMode::Pace`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace_sec_per_km: Option<f64>,
    /// Indoor session (trainer, treadmill, pool)
    #[serde(default)]
    pub indoor: bool,
    /// Race-day effort
    #[serde(default)]
    pub race_day: bool,
    /// Planned or completed
    #[serde(default)]
    pub planned_or_completed: SessionStatus,
    /// Average heart rate telemetry (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate_bpm: Option<f64>,
    /// Maximum heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heart_rate_bpm: Option<f64>,
    /// Average power telemetry (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_power_watts: Option<f64>,
    /// Normalized power telemetry (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_power_watts: Option<f64>,
    /// Average cadence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cadence: Option<f64>,
    /// Distance covered (km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Elevation gain (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    /// Planned start; echoed into schedule clock times
    #[serde(
        default,
        rename = "planned_start_iso",
        skip_serializing_if = "Option::is_none"
    )]
    pub planned_start: Option<DateTime<FixedOffset>>,
}

impl SessionContext {
    /// Session with the given sport, duration, and perceived exertion; everything else default
    #[must_use]
    pub const fn new(sport: SportType, duration_minutes: u32, intensity_rpe: f64) -> Self {
        Self {
            sport,
            duration_minutes,
            intensity_rpe,
            intensity_mode: IntensityMode::Rpe,
            target_heart_rate_bpm: None,
            target_power_watts: None,
            target_pace_sec_per_km: None,
            indoor: false,
            race_day: false,
            planned_or_completed: SessionStatus::Planned,
            avg_heart_rate_bpm: None,
            max_heart_rate_bpm: None,
            avg_power_watts: None,
            normalized_power_watts: None,
            avg_cadence: None,
            distance_km: None,
            elevation_gain_m: None,
            planned_start: None,
        }
    }

    /// Duration in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }

    /// Heart rate describing the session load: telemetry first, then an HR target
    #[must_use]
    pub fn effective_heart_rate(&self) -> Option<f64> {
        self.avg_heart_rate_bpm
            .or(match self.intensity_mode {
                IntensityMode::Hr => self.target_heart_rate_bpm,
                IntensityMode::Rpe | IntensityMode::Power | IntensityMode::Pace => None,
            })
            .filter(|bpm| *bpm > 0.0)
    }

    /// Power describing the session load: telemetry first, then a power target
    #[must_use]
    pub fn effective_power(&self) -> Option<f64> {
        self.avg_power_watts
            .or(match self.intensity_mode {
                IntensityMode::Power => self.target_power_watts,
                IntensityMode::Rpe | IntensityMode::Hr | IntensityMode::Pace => None,
            })
            .filter(|w| *w > 0.0)
    }

    /// Maximum heart rate, if known and positive
    #[must_use]
    pub fn max_heart_rate(&self) -> Option<f64> {
        self.max_heart_rate_bpm.filter(|bpm| *bpm > 0.0)
    }

    /// True when heart-rate or power telemetry was recorded
    #[must_use]
    pub const fn has_hr_or_power_telemetry(&self) -> bool {
        self.avg_heart_rate_bpm.is_some() || self.avg_power_watts.is_some()
    }
}
