// ABOUTME: Confidence estimator producing a plausibility band from input completeness
// ABOUTME: Every missing optional input widens the band and adds an uncertainty note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelcast_core::models::PredictionRequest;

use crate::config::ConfidenceConfig;
use crate::numeric::round_to;

/// Confidence band with the notes explaining its width
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBand {
    /// Lower bound, rounded to 0.01
    pub low: f64,
    /// Upper bound, rounded to 0.01
    pub high: f64,
    /// Accumulated uncertainty
    pub uncertainty: f64,
    /// One note per missing input
    pub notes: Vec<String>,
}

/// Estimate the confidence band for a request
///
/// Depends only on which inputs are present, never on computed outputs.
#[must_use]
pub fn estimate(request: &PredictionRequest, config: &ConfidenceConfig) -> ConfidenceBand {
    let profile = &request.profile;
    let gaps = [
        (
            profile.vo2max.is_none(),
            config.missing_vo2max,
            "VO2max missing; confidence widened.",
        ),
        (
            profile.lactate_threshold_pct.is_none(),
            config.missing_lactate_threshold,
            "Lactate threshold missing; threshold assumptions applied.",
        ),
        (
            profile.sleep_hours.is_none(),
            config.missing_sleep,
            "Sleep data missing; recovery estimate less precise.",
        ),
        (
            profile.hrv_score.is_none(),
            config.missing_hrv,
            "HRV missing; readiness uncertainty increased.",
        ),
        (
            !request.session.has_hr_or_power_telemetry(),
            config.missing_telemetry,
            "No HR/power telemetry provided; load estimate less precise.",
        ),
        (
            !profile.has_any_ftp(),
            config.missing_ftp,
            "FTP missing; intensity factor confidence reduced.",
        ),
    ];

    let mut uncertainty = config.base_uncertainty;
    let mut notes = Vec::new();
    for (missing, penalty, note) in gaps {
        if missing {
            uncertainty += penalty;
            notes.push(note.to_owned());
        }
    }

    let center = if request.science_mode {
        config.science_center
    } else {
        config.standard_center
    };

    ConfidenceBand {
        low: round_to(config.low_bounds.clamp(center - uncertainty), 2),
        high: round_to(config.high_bounds.clamp(center + uncertainty), 2),
        uncertainty,
        notes,
    }
}
