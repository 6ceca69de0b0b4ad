// ABOUTME: Athlete profile store supplying stored or default profiles and default conditions
// ABOUTME: Partial updates merge over the current profile; requests missing a profile use it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use std::collections::HashMap;

use crate::errors::AppResult;
use crate::models::{AthleteProfile, EnvironmentContext};

/// Profile used for athletes that never saved one
#[must_use]
pub fn default_profile() -> AthleteProfile {
    AthleteProfile {
        body_fat_percent: Some(15.0),
        vo2max: Some(50.0),
        lactate_threshold_pct: Some(85.0),
        gi_tolerance_score: 6.0,
        sweat_rate_l_h: Some(0.9),
        sodium_loss_mg_l: Some(850.0),
        bike_ftp_w: Some(280.0),
        run_ftp_w: Some(320.0),
        run_threshold_pace_sec_per_km: Some(240.0),
        bike_lt1_hr_bpm: Some(145.0),
        bike_lt2_hr_bpm: Some(172.0),
        run_lt1_hr_bpm: Some(150.0),
        run_lt2_hr_bpm: Some(178.0),
        max_carb_absorption_g_h: Some(110.0),
        gut_training_level: 6.0,
        ..AthleteProfile::with_body_mass(72.0)
    }
}

/// Conditions assumed when a request carries none
#[must_use]
pub const fn default_environment() -> EnvironmentContext {
    EnvironmentContext::new(20.0, 55.0, 100.0)
}

/// An athlete's saved profile plus their default session conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Physiology
    pub profile: AthleteProfile,
    /// Conditions used when a request omits the environment
    pub default_environment: EnvironmentContext,
    /// Indoor flag used when a request omits it
    pub default_indoor: bool,
    /// Last update; `None` for the built-in default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for StoredProfile {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            default_environment: default_environment(),
            default_indoor: false,
            updated_at: None,
        }
    }
}

/// Partial profile update; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    /// Body mass (kg)
    pub body_mass_kg: Option<f64>,
    /// Body fat (%)
    pub body_fat_percent: Option<f64>,
    /// `VO2max` (ml/kg/min)
    pub vo2max: Option<f64>,
    /// Lactate threshold (% of max)
    pub lactate_threshold_pct: Option<f64>,
    /// GI tolerance (0-10)
    pub gi_tolerance_score: Option<f64>,
    /// Sweat rate (L/h)
    pub sweat_rate_l_h: Option<f64>,
    /// Sweat sodium (mg/L)
    pub sodium_loss_mg_l: Option<f64>,
    /// Bike FTP (W)
    pub bike_ftp_w: Option<f64>,
    /// Run FTP (W)
    pub run_ftp_w: Option<f64>,
    /// Run threshold pace (s/km)
    pub run_threshold_pace_sec_per_km: Option<f64>,
    /// Bike LT1 (bpm)
    pub bike_lt1_hr_bpm: Option<f64>,
    /// Bike LT2 (bpm)
    pub bike_lt2_hr_bpm: Option<f64>,
    /// Run LT1 (bpm)
    pub run_lt1_hr_bpm: Option<f64>,
    /// Run LT2 (bpm)
    pub run_lt2_hr_bpm: Option<f64>,
    /// Tested carbohydrate absorption (g/h)
    pub max_carb_absorption_g_h: Option<f64>,
    /// Gut training (0-10)
    pub gut_training_level: Option<f64>,
    /// Default temperature (°C)
    pub default_temperature_c: Option<f64>,
    /// Default humidity (%)
    pub default_humidity_pct: Option<f64>,
    /// Default altitude (m)
    pub default_altitude_m: Option<f64>,
    /// Default terrain factor
    pub default_terrain_factor: Option<f64>,
    /// Default indoor flag
    pub default_indoor: Option<bool>,
}

fn merge_some(target: &mut Option<f64>, value: Option<f64>) {
    if value.is_some() {
        *target = value;
    }
}

impl ProfileUpdate {
    /// Apply this update on top of `current`
    #[must_use]
    pub fn merge_into(&self, current: &StoredProfile) -> StoredProfile {
        let mut merged = current.clone();
        let profile = &mut merged.profile;

        if let Some(mass) = self.body_mass_kg {
            profile.body_mass_kg = mass;
        }
        if let Some(score) = self.gi_tolerance_score {
            profile.gi_tolerance_score = score;
        }
        if let Some(level) = self.gut_training_level {
            profile.gut_training_level = level;
        }
        merge_some(&mut profile.body_fat_percent, self.body_fat_percent);
        merge_some(&mut profile.vo2max, self.vo2max);
        merge_some(&mut profile.lactate_threshold_pct, self.lactate_threshold_pct);
        merge_some(&mut profile.sweat_rate_l_h, self.sweat_rate_l_h);
        merge_some(&mut profile.sodium_loss_mg_l, self.sodium_loss_mg_l);
        merge_some(&mut profile.bike_ftp_w, self.bike_ftp_w);
        merge_some(&mut profile.run_ftp_w, self.run_ftp_w);
        merge_some(
            &mut profile.run_threshold_pace_sec_per_km,
            self.run_threshold_pace_sec_per_km,
        );
        merge_some(&mut profile.bike_lt1_hr_bpm, self.bike_lt1_hr_bpm);
        merge_some(&mut profile.bike_lt2_hr_bpm, self.bike_lt2_hr_bpm);
        merge_some(&mut profile.run_lt1_hr_bpm, self.run_lt1_hr_bpm);
        merge_some(&mut profile.run_lt2_hr_bpm, self.run_lt2_hr_bpm);
        merge_some(
            &mut profile.max_carb_absorption_g_h,
            self.max_carb_absorption_g_h,
        );

        let environment = &mut merged.default_environment;
        if let Some(t) = self.default_temperature_c {
            environment.temperature_c = t;
        }
        if let Some(h) = self.default_humidity_pct {
            environment.humidity_pct = h;
        }
        if let Some(a) = self.default_altitude_m {
            environment.altitude_m = a;
        }
        if let Some(terrain) = self.default_terrain_factor {
            environment.terrain_factor = terrain;
        }
        if let Some(indoor) = self.default_indoor {
            merged.default_indoor = indoor;
        }
        merged
    }
}

/// Check run on a merged profile before it is committed
pub type ProfileCheck = fn(&StoredProfile) -> AppResult<()>;

/// Source of athlete profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Stored profile, or the default profile when none was saved
    async fn get(&self, athlete_id: &str) -> StoredProfile;

    /// Merge `update` over the current profile, run `check`, and commit
    ///
    /// Read, merge, and write happen as one step per athlete; a failing
    /// check leaves the stored profile untouched.
    ///
    /// # Errors
    ///
    /// Returns the check's error, or an error if the backing store rejects the write
    async fn upsert(
        &self,
        athlete_id: &str,
        update: &ProfileUpdate,
        check: ProfileCheck,
    ) -> AppResult<StoredProfile>;
}

/// Profile store kept in process memory
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, StoredProfile>>,
}

impl InMemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, athlete_id: &str) -> StoredProfile {
        self.profiles
            .read()
            .await
            .get(athlete_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn upsert(
        &self,
        athlete_id: &str,
        update: &ProfileUpdate,
        check: ProfileCheck,
    ) -> AppResult<StoredProfile> {
        let mut profiles = self.profiles.write().await;
        let current = profiles.get(athlete_id).cloned().unwrap_or_default();
        let mut merged = update.merge_into(&current);
        check(&merged)?;
        merged.updated_at = Some(Utc::now());
        profiles.insert(athlete_id.to_owned(), merged.clone());
        Ok(merged)
    }
}
