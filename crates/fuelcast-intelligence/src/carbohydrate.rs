// ABOUTME: Carbohydrate rate model deriving the shared base g/h for every strategy
// ABOUTME: Duration bucket, mass, sport, load, intensity factor, guardrail, and gut capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Carbohydrate rate model.
//!
//! ```text
//! rate = (base + effort_fraction * span + (mass - 70) * 0.12)
//!        * sport * load * intensity_factor * race_day * indoor * gi_tolerance
//! ```
//!
//! followed by the easy-session guardrail and the final clamp to
//! `[floor, min(gut capacity, hard cap)]`.

use fuelcast_core::models::{AthleteProfile, Discipline, SessionContext, SportType};
use tracing::debug;

use crate::config::{CarbBase, CarbohydrateConfig};
use crate::intensity::NormalizedIntensity;
use crate::load_factors::LoadFactors;

/// Base carbohydrate rate shared by all strategies
#[derive(Debug, Clone, PartialEq)]
pub struct CarbohydrateRate {
    /// Final base rate (g/h)
    pub g_per_hour: f64,
    /// Upper limit applied by the final clamp (g/h)
    pub gut_capacity_g_per_hour: f64,
    /// True when the easy-session guardrail lowered the rate
    pub guardrail_applied: bool,
    /// Intensity-factor, guardrail, and gut-capacity notes
    pub notes: Vec<String>,
}

/// Duration bucket for a session length
#[must_use]
pub fn duration_bucket(hours: f64, config: &CarbohydrateConfig) -> CarbBase {
    config
        .duration_buckets
        .iter()
        .find(|bucket| hours < bucket.below_hours)
        .map_or(config.long_session, |bucket| bucket.rate)
}

/// Gut absorption ceiling: tested maximum if known, otherwise trained estimate
#[must_use]
pub fn gut_capacity(profile: &AthleteProfile, config: &CarbohydrateConfig) -> f64 {
    profile
        .max_carb_absorption_g_h
        .filter(|g| *g > 0.0)
        .unwrap_or_else(|| {
            profile
                .gut_training_level
                .mul_add(config.gut.per_training_level_g, config.gut.base_capacity_g_per_hour)
        })
}

/// Compute the base carbohydrate rate
#[must_use]
pub fn base_rate(
    session: &SessionContext,
    profile: &AthleteProfile,
    intensity: &NormalizedIntensity,
    load: &LoadFactors,
    config: &CarbohydrateConfig,
) -> CarbohydrateRate {
    let hours = session.duration_hours();
    let bucket = duration_bucket(hours, config);
    let mut notes = Vec::new();

    let mut rate = intensity
        .fraction()
        .mul_add(bucket.span_g_per_hour, bucket.base_g_per_hour);
    rate += (profile.body_mass_kg - config.reference_mass_kg) * config.per_kg_offset_g;
    rate *= config.sport_multipliers.get(session.sport);
    rate *= load.combined();
    rate *= intensity_factor(session, profile, config, &mut notes);

    if session.race_day {
        rate *= config.race_day_multiplier;
        notes.push("Race-day fueling bonus applied.".to_owned());
    }
    if session.indoor {
        rate *= config.indoor_multiplier;
        notes.push("Indoor session adjustment applied.".to_owned());
    }

    let tolerance = &config.gi_tolerance;
    rate *= tolerance.bounds.clamp(
        1.0 - (tolerance.neutral_score - profile.gi_tolerance_score) * tolerance.per_point,
    );

    let guardrail = &config.guardrail;
    let mut guardrail_applied = false;
    if intensity.effort <= guardrail.max_effort && hours <= guardrail.max_hours && !session.race_day
    {
        let ceiling = guardrail.ceilings_g_per_hour.get(session.sport);
        if rate > ceiling {
            rate = ceiling;
            guardrail_applied = true;
            notes.push(format!(
                "Easy-session guardrail capped carbs at {ceiling:.0} g/h for {}.",
                session.sport
            ));
        }
    }

    let gut = &config.gut;
    let capacity = gut_capacity(profile, config);
    let upper = capacity.min(gut.hard_cap_g_per_hour).max(gut.floor_g_per_hour);
    if rate > upper {
        notes.push(format!("Gut capacity limits carbs to {upper:.0} g/h."));
    }
    let g_per_hour = rate.max(gut.floor_g_per_hour).min(upper);

    debug!(
        sport = %session.sport,
        hours,
        effort = intensity.effort,
        base_rate = g_per_hour,
        guardrail_applied,
        "Base carbohydrate rate computed"
    );

    CarbohydrateRate {
        g_per_hour,
        gut_capacity_g_per_hour: upper,
        guardrail_applied,
        notes,
    }
}

/// Sport-gated power/FTP and HR/LT2 corrections, each clamped
fn intensity_factor(
    session: &SessionContext,
    profile: &AthleteProfile,
    config: &CarbohydrateConfig,
    notes: &mut Vec<String>,
) -> f64 {
    let curves = &config.intensity_factor;
    let mut factor = 1.0;

    if let Some(power) = session.effective_power() {
        match session.sport.power_discipline() {
            Some(Discipline::Bike) => {
                if let Some(ftp) = profile.ftp_for(Discipline::Bike) {
                    factor *= curves.bike_power.apply(power / ftp);
                    notes.push("Bike intensity factor based on power / FTP.".to_owned());
                }
            }
            Some(Discipline::Run) => {
                if let Some(ftp) = profile.ftp_for(Discipline::Run) {
                    factor *= curves.run_power.apply(power / ftp);
                    notes.push("Run intensity factor based on run power / rFTP.".to_owned());
                }
            }
            None => {}
        }
    }

    if let Some(hr) = session.effective_heart_rate() {
        let discipline = match session.sport {
            SportType::Running | SportType::TrailRunning => Some(Discipline::Run),
            SportType::Cycling => Some(Discipline::Bike),
            SportType::Swimming
            | SportType::Hiking
            | SportType::Gym
            | SportType::Hiit
            | SportType::Hyrox => None,
        };
        if let Some((discipline, lt2)) =
            discipline.and_then(|d| profile.lt2_for(d).map(|lt2| (d, lt2)))
        {
            factor *= curves.lt2_heart_rate.apply(hr / lt2);
            notes.push(match discipline {
                Discipline::Run => "Run LT2 heart-rate ratio adjustment applied.".to_owned(),
                Discipline::Bike => "Bike LT2 heart-rate ratio adjustment applied.".to_owned(),
            });
        }
    }

    factor
}
