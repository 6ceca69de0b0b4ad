// ABOUTME: Athlete profile model with physiological thresholds and gut capacity inputs
// ABOUTME: Immutable per request; optional fields are substituted with defaults at point of use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::sport::Discipline;

const fn default_gi_tolerance() -> f64 {
    5.0
}

/// Athlete physiology relevant to fueling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Body mass in kilograms
    pub body_mass_kg: f64,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// `VO2max` in ml/kg/min
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vo2max: Option<f64>,
    /// Lactate threshold as percentage of max
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lactate_threshold_pct: Option<f64>,
    /// GI tolerance score (0 = very sensitive, 10 = iron gut)
    #[serde(default = "default_gi_tolerance")]
    pub gi_tolerance_score: f64,
    /// Sleep last night in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// HRV readiness score (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrv_score: Option<f64>,
    /// Measured sweat rate in L/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweat_rate_l_h: Option<f64>,
    /// Sweat sodium concentration in mg/L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_loss_mg_l: Option<f64>,
    /// Bike functional threshold power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_ftp_w: Option<f64>,
    /// Run functional threshold power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_ftp_w: Option<f64>,
    /// Run threshold pace (s/km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_threshold_pace_sec_per_km: Option<f64>,
    /// Bike LT1 heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_lt1_hr_bpm: Option<f64>,
    /// Bike LT2 heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_lt2_hr_bpm: Option<f64>,
    /// Run LT1 heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_lt1_hr_bpm: Option<f64>,
    /// Run LT2 heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_lt2_hr_bpm: Option<f64>,
    /// Tested maximum carbohydrate absorption (g/h)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_carb_absorption_g_h: Option<f64>,
    /// Gut training level (0-10)
    #[serde(default)]
    pub gut_training_level: f64,
}

impl AthleteProfile {
    /// Minimal profile: body mass only, every optional field absent
    #[must_use]
    pub const fn with_body_mass(body_mass_kg: f64) -> Self {
        Self {
            body_mass_kg,
            body_fat_percent: None,
            vo2max: None,
            lactate_threshold_pct: None,
            gi_tolerance_score: default_gi_tolerance(),
            sleep_hours: None,
            hrv_score: None,
            sweat_rate_l_h: None,
            sodium_loss_mg_l: None,
            bike_ftp_w: None,
            run_ftp_w: None,
            run_threshold_pace_sec_per_km: None,
            bike_lt1_hr_bpm: None,
            bike_lt2_hr_bpm: None,
            run_lt1_hr_bpm: None,
            run_lt2_hr_bpm: None,
            max_carb_absorption_g_h: None,
            gut_training_level: 0.0,
        }
    }

    /// FTP for a discipline, if known and positive
    #[must_use]
    pub fn ftp_for(&self, discipline: Discipline) -> Option<f64> {
        let ftp = match discipline {
            Discipline::Bike => self.bike_ftp_w,
            Discipline::Run => self.run_ftp_w,
        };
        ftp.filter(|w| *w > 0.0)
    }

    /// LT1 heart rate for a discipline, if known and positive
    #[must_use]
    pub fn lt1_for(&self, discipline: Discipline) -> Option<f64> {
        let lt1 = match discipline {
            Discipline::Bike => self.bike_lt1_hr_bpm,
            Discipline::Run => self.run_lt1_hr_bpm,
        };
        lt1.filter(|bpm| *bpm > 0.0)
    }

    /// LT2 heart rate for a discipline, if known and positive
    #[must_use]
    pub fn lt2_for(&self, discipline: Discipline) -> Option<f64> {
        let lt2 = match discipline {
            Discipline::Bike => self.bike_lt2_hr_bpm,
            Discipline::Run => self.run_lt2_hr_bpm,
        };
        lt2.filter(|bpm| *bpm > 0.0)
    }

    /// Run threshold pace, if known and positive
    #[must_use]
    pub fn threshold_pace(&self) -> Option<f64> {
        self.run_threshold_pace_sec_per_km.filter(|s| *s > 0.0)
    }

    /// True when either bike or run FTP is known
    #[must_use]
    pub const fn has_any_ftp(&self) -> bool {
        self.bike_ftp_w.is_some() || self.run_ftp_w.is_some()
    }
}
