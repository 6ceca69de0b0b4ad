// ABOUTME: Intensity normalizer mapping HR, power, pace, or RPE onto the 1-10 effort scale
// ABOUTME: Deterministic fallback chain that always ends at clamped perceived exertion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intensity normalization.
//!
//! Each intensity mode has its own mapping onto the canonical effort scale:
//!
//! - **Heart rate**: piecewise-linear between the implicit floor, LT1, LT2,
//!   and max HR; falls back to the HR / max-HR ratio when landmarks are
//!   missing.
//! - **Power**: power / FTP ratio through five bands.
//! - **Pace**: threshold pace / target pace ratio through three bands
//!   (faster than threshold gives a ratio above 1).
//!
//! Any missing prerequisite drops to the raw perceived exertion. The result
//! is always inside the configured effort bounds.

use fuelcast_core::models::{AthleteProfile, IntensityMode, SessionContext};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::IntensityConfig;
use crate::numeric::{fraction_between, interpolate_bands, lerp};

/// Signal the effort value was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortSource {
    /// Raw perceived exertion
    PerceivedExertion,
    /// Heart rate against LT1/LT2 landmarks
    HeartRateThresholds,
    /// Heart rate against max HR
    HeartRateMax,
    /// Power against FTP
    PowerFtp,
    /// Pace against threshold pace
    PaceThreshold,
}

impl EffortSource {
    const fn label(self) -> &'static str {
        match self {
            Self::PerceivedExertion => "perceived exertion",
            Self::HeartRateThresholds => "heart rate vs LT1/LT2 thresholds",
            Self::HeartRateMax => "heart rate vs max HR",
            Self::PowerFtp => "power vs FTP",
            Self::PaceThreshold => "pace vs threshold pace",
        }
    }
}

impl fmt::Display for EffortSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Effort on the canonical scale and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIntensity {
    /// Effort (1-10)
    pub effort: f64,
    /// Source signal
    pub source: EffortSource,
}

impl NormalizedIntensity {
    /// Effort as a 0-1 fraction of the 10-point scale
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.effort / 10.0
    }

    /// Rationale note naming the source
    #[must_use]
    pub fn note(&self) -> String {
        format!(
            "Normalized effort {:.1}/10 derived from {}.",
            self.effort, self.source
        )
    }
}

/// Map the session's intensity signal onto the effort scale
#[must_use]
pub fn normalize(
    session: &SessionContext,
    profile: &AthleteProfile,
    config: &IntensityConfig,
) -> NormalizedIntensity {
    let mapped = match session.intensity_mode {
        IntensityMode::Rpe => None,
        IntensityMode::Hr => from_heart_rate(session, profile, config),
        IntensityMode::Power => from_power(session, profile, config),
        IntensityMode::Pace => from_pace(session, profile, config),
    };

    let (effort, source) =
        mapped.unwrap_or((session.intensity_rpe, EffortSource::PerceivedExertion));

    NormalizedIntensity {
        effort: config.effort_bounds.clamp(effort),
        source,
    }
}

fn from_heart_rate(
    session: &SessionContext,
    profile: &AthleteProfile,
    config: &IntensityConfig,
) -> Option<(f64, EffortSource)> {
    let hr = session
        .target_heart_rate_bpm
        .or(session.avg_heart_rate_bpm)
        .filter(|bpm| *bpm > 0.0)?;

    let landmarks = session.sport.threshold_discipline().and_then(|discipline| {
        let lt1 = profile.lt1_for(discipline)?;
        let lt2 = profile.lt2_for(discipline)?;
        (lt2 > lt1).then_some((lt1, lt2))
    });

    if let Some((lt1, lt2)) = landmarks {
        let hr_config = &config.heart_rate;
        let floor = lt1 * hr_config.floor_fraction_of_lt1;
        let max_hr = session
            .max_heart_rate()
            .filter(|max| *max > lt2)
            .unwrap_or(lt2 * hr_config.implicit_max_over_lt2);

        let effort = if hr <= lt1 {
            lerp(hr_config.below_lt1_effort, fraction_between(hr, floor, lt1))
        } else if hr <= lt2 {
            lerp(hr_config.lt1_to_lt2_effort, fraction_between(hr, lt1, lt2))
        } else {
            lerp(hr_config.above_lt2_effort, fraction_between(hr, lt2, max_hr))
        };
        return Some((effort, EffortSource::HeartRateThresholds));
    }

    let max_hr = session.max_heart_rate()?;
    let effort = interpolate_bands(&[config.heart_rate.max_hr_band], hr / max_hr)?;
    Some((effort, EffortSource::HeartRateMax))
}

fn from_power(
    session: &SessionContext,
    profile: &AthleteProfile,
    config: &IntensityConfig,
) -> Option<(f64, EffortSource)> {
    let power = session
        .target_power_watts
        .or(session.avg_power_watts)
        .filter(|w| *w > 0.0)?;
    let ftp = session
        .sport
        .power_discipline()
        .and_then(|discipline| profile.ftp_for(discipline))?;
    let effort = interpolate_bands(&config.power_bands, power / ftp)?;
    Some((effort, EffortSource::PowerFtp))
}

fn from_pace(
    session: &SessionContext,
    profile: &AthleteProfile,
    config: &IntensityConfig,
) -> Option<(f64, EffortSource)> {
    if !session.sport.supports_pace() {
        return None;
    }
    let target = session.target_pace_sec_per_km.filter(|s| *s > 0.0)?;
    let threshold = profile.threshold_pace()?;
    let effort = interpolate_bands(&config.pace_bands, threshold / target)?;
    Some((effort, EffortSource::PaceThreshold))
}
