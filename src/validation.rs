// ABOUTME: Boundary validation for prediction, simulation, custom food, and workout log inputs
// ABOUTME: Rejects non-finite and out-of-range values before anything reaches the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request validation.
//!
//! The engine assumes validated input; every range it relies on is checked
//! here. Each rejection names the offending field.

use crate::catalog::NewFoodItem;
use crate::constants::limits::{self, Range};
use crate::errors::{AppError, AppResult};
use crate::models::{
    AthleteProfile, EnvironmentContext, PredictionRequest, SessionContext, SimulationRequest,
};
use crate::profiles::StoredProfile;
use crate::workouts::{NewFuelingEvent, NewWorkout, WorkoutMetrics, WorkoutUpdate};

fn check_finite(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("{field} must be a finite number")).with_field(field))
    }
}

/// Inclusive range check
///
/// # Errors
///
/// Returns `ValueOutOfRange` naming `field` when `value` is outside `range`
pub fn check_range(field: &str, value: f64, range: Range) -> AppResult<()> {
    check_finite(field, value)?;
    if value < range.0 || value > range.1 {
        return Err(AppError::value_out_of_range(field, value, range.0, range.1));
    }
    Ok(())
}

fn check_exclusive(field: &str, value: f64, range: Range) -> AppResult<()> {
    check_finite(field, value)?;
    if value <= range.0 || value >= range.1 {
        return Err(AppError::value_out_of_range(field, value, range.0, range.1));
    }
    Ok(())
}

fn check_optional(field: &str, value: Option<f64>, range: Range) -> AppResult<()> {
    value.map_or(Ok(()), |v| check_range(field, v, range))
}

fn check_non_negative(field: &str, value: Option<f64>) -> AppResult<()> {
    value.map_or(Ok(()), |v| check_range(field, v, (0.0, f64::MAX)))
}

fn check_optional_len(field: &str, value: Option<&str>, bounds: (usize, usize)) -> AppResult<()> {
    value.map_or(Ok(()), |v| check_len(field, v, bounds))
}

fn check_len(field: &str, value: &str, (min, max): (usize, usize)) -> AppResult<()> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(AppError::invalid_input(format!(
            "{field} must be between {min} and {max} characters"
        ))
        .with_field(field));
    }
    Ok(())
}

/// Validate an athlete profile
///
/// # Errors
///
/// Returns the first out-of-range or non-finite field
pub fn validate_profile(profile: &AthleteProfile) -> AppResult<()> {
    use limits::profile as p;

    check_exclusive("profile.body_mass_kg", profile.body_mass_kg, p::BODY_MASS_KG)?;
    check_optional(
        "profile.body_fat_percent",
        profile.body_fat_percent,
        p::BODY_FAT_PERCENT,
    )?;
    check_optional("profile.vo2max", profile.vo2max, p::VO2MAX)?;
    check_optional(
        "profile.lactate_threshold_pct",
        profile.lactate_threshold_pct,
        p::LACTATE_THRESHOLD_PCT,
    )?;
    check_range(
        "profile.gi_tolerance_score",
        profile.gi_tolerance_score,
        p::GI_TOLERANCE,
    )?;
    check_optional("profile.sleep_hours", profile.sleep_hours, p::SLEEP_HOURS)?;
    check_optional("profile.hrv_score", profile.hrv_score, p::HRV_SCORE)?;
    check_optional(
        "profile.sweat_rate_l_h",
        profile.sweat_rate_l_h,
        p::SWEAT_RATE_L_H,
    )?;
    check_optional(
        "profile.sodium_loss_mg_l",
        profile.sodium_loss_mg_l,
        p::SODIUM_LOSS_MG_L,
    )?;
    check_optional("profile.bike_ftp_w", profile.bike_ftp_w, p::FTP_W)?;
    check_optional("profile.run_ftp_w", profile.run_ftp_w, p::FTP_W)?;
    check_optional(
        "profile.run_threshold_pace_sec_per_km",
        profile.run_threshold_pace_sec_per_km,
        p::THRESHOLD_PACE_SEC_PER_KM,
    )?;
    check_optional("profile.bike_lt1_hr_bpm", profile.bike_lt1_hr_bpm, p::LT1_HR_BPM)?;
    check_optional("profile.bike_lt2_hr_bpm", profile.bike_lt2_hr_bpm, p::LT2_HR_BPM)?;
    check_optional("profile.run_lt1_hr_bpm", profile.run_lt1_hr_bpm, p::LT1_HR_BPM)?;
    check_optional("profile.run_lt2_hr_bpm", profile.run_lt2_hr_bpm, p::LT2_HR_BPM)?;
    check_optional(
        "profile.max_carb_absorption_g_h",
        profile.max_carb_absorption_g_h,
        p::MAX_CARB_ABSORPTION_G_H,
    )?;
    check_range(
        "profile.gut_training_level",
        profile.gut_training_level,
        p::GUT_TRAINING_LEVEL,
    )
}

/// Validate a session
///
/// # Errors
///
/// Returns the first out-of-range or non-finite field
pub fn validate_session(session: &SessionContext) -> AppResult<()> {
    use limits::session as s;

    let (min_minutes, max_minutes) = s::DURATION_MINUTES;
    if session.duration_minutes < min_minutes || session.duration_minutes > max_minutes {
        return Err(AppError::value_out_of_range(
            "session.duration_minutes",
            f64::from(session.duration_minutes),
            f64::from(min_minutes),
            f64::from(max_minutes),
        ));
    }
    check_range(
        "session.intensity_rpe",
        session.intensity_rpe,
        s::INTENSITY_RPE,
    )?;
    check_optional(
        "session.target_heart_rate_bpm",
        session.target_heart_rate_bpm,
        s::TARGET_HEART_RATE_BPM,
    )?;
    check_optional(
        "session.target_power_watts",
        session.target_power_watts,
        s::POWER_WATTS,
    )?;
    check_optional(
        "session.target_pace_sec_per_km",
        session.target_pace_sec_per_km,
        s::TARGET_PACE_SEC_PER_KM,
    )?;
    check_optional(
        "session.avg_heart_rate_bpm",
        session.avg_heart_rate_bpm,
        s::AVG_HEART_RATE_BPM,
    )?;
    check_optional(
        "session.max_heart_rate_bpm",
        session.max_heart_rate_bpm,
        s::MAX_HEART_RATE_BPM,
    )?;
    check_optional(
        "session.avg_power_watts",
        session.avg_power_watts,
        s::POWER_WATTS,
    )?;
    check_optional(
        "session.normalized_power_watts",
        session.normalized_power_watts,
        s::POWER_WATTS,
    )?;
    check_optional("session.avg_cadence", session.avg_cadence, s::CADENCE)?;
    check_non_negative("session.distance_km", session.distance_km)?;
    check_non_negative("session.elevation_gain_m", session.elevation_gain_m)
}

/// Validate environmental conditions
///
/// # Errors
///
/// Returns the first out-of-range or non-finite field
pub fn validate_environment(environment: &EnvironmentContext) -> AppResult<()> {
    use limits::environment as e;

    check_range(
        "environment.temperature_c",
        environment.temperature_c,
        e::TEMPERATURE_C,
    )?;
    check_range(
        "environment.humidity_pct",
        environment.humidity_pct,
        e::HUMIDITY_PCT,
    )?;
    check_range(
        "environment.altitude_m",
        environment.altitude_m,
        e::ALTITUDE_M,
    )?;
    check_range(
        "environment.terrain_factor",
        environment.terrain_factor,
        e::TERRAIN_FACTOR,
    )
}

/// Validate a complete prediction request
///
/// # Errors
///
/// Returns the first invalid field of the profile, session, or environment
pub fn validate_request(request: &PredictionRequest) -> AppResult<()> {
    validate_profile(&request.profile)?;
    validate_session(&request.session)?;
    validate_environment(&request.environment)
}

/// Validate a simulation: the base request and the perturbed request must both be in range
///
/// # Errors
///
/// Returns the first invalid field; perturbed fields are prefixed with `simulated.`
pub fn validate_simulation(
    simulation: &SimulationRequest,
    perturbed: &PredictionRequest,
) -> AppResult<()> {
    check_finite("hotter_by_c", simulation.hotter_by_c)?;
    check_finite("intensity_delta_rpe", simulation.intensity_delta_rpe)?;
    validate_request(&simulation.base_request)?;
    validate_request(perturbed).map_err(|e| {
        let field = e.context.field.clone().unwrap_or_default();
        AppError::new(e.code, format!("Simulated request invalid: {}", e.message))
            .with_field(format!("simulated.{field}"))
            .with_details(e.context.details.clone())
    })
}

/// Validate a merged stored profile and its default conditions
///
/// # Errors
///
/// Returns the first invalid profile or default-environment field
pub fn validate_stored_profile(stored: &StoredProfile) -> AppResult<()> {
    validate_profile(&stored.profile)?;
    validate_environment(&stored.default_environment)
}

/// Validate a custom food before it enters the catalog
///
/// # Errors
///
/// Returns the first invalid field
pub fn validate_food(food: &NewFoodItem) -> AppResult<()> {
    use limits::food as f;

    check_len("name", &food.name, f::NAME_LEN)?;
    check_len("category", &food.category, f::CATEGORY_LEN)?;
    check_len("serving_desc", &food.serving_desc, f::SERVING_LEN)?;
    check_range("carbs_g", food.carbs_g, f::CARBS_G)?;
    check_range("sodium_mg", food.sodium_mg, f::SODIUM_MG)?;
    check_range("fluid_ml", food.fluid_ml, f::FLUID_ML)?;
    check_range("caffeine_mg", food.caffeine_mg, f::CAFFEINE_MG)
}

fn validate_workout_metrics(metrics: &WorkoutMetrics) -> AppResult<()> {
    use limits::workout as w;

    check_non_negative("duration_minutes", metrics.duration_minutes)?;
    check_optional("intensity_rpe", metrics.intensity_rpe, w::INTENSITY_RPE)?;
    check_optional(
        "avg_heart_rate_bpm",
        metrics.avg_heart_rate_bpm,
        w::AVG_HEART_RATE_BPM,
    )?;
    check_optional(
        "max_heart_rate_bpm",
        metrics.max_heart_rate_bpm,
        w::MAX_HEART_RATE_BPM,
    )?;
    check_optional("avg_power_watts", metrics.avg_power_watts, w::POWER_WATTS)?;
    check_optional(
        "normalized_power_watts",
        metrics.normalized_power_watts,
        w::POWER_WATTS,
    )?;
    check_optional("avg_cadence", metrics.avg_cadence, w::CADENCE)?;
    check_non_negative("distance_km", metrics.distance_km)?;
    check_non_negative("elevation_gain_m", metrics.elevation_gain_m)?;
    check_non_negative("tss", metrics.tss)?;
    check_non_negative("completed_carbs_g", metrics.completed_carbs_g)?;
    check_non_negative("completed_fluids_ml", metrics.completed_fluids_ml)?;
    check_non_negative("completed_sodium_mg", metrics.completed_sodium_mg)?;
    check_optional("temperature_c", metrics.temperature_c, w::TEMPERATURE_C)?;
    check_optional("humidity_pct", metrics.humidity_pct, w::HUMIDITY_PCT)?;
    check_optional_len("notes", metrics.notes.as_deref(), w::NOTES_LEN)
}

/// Validate a workout before it is logged
///
/// # Errors
///
/// Returns the first invalid field
pub fn validate_workout(workout: &NewWorkout) -> AppResult<()> {
    use limits::workout as w;

    check_len("source", &workout.source, w::SOURCE_LEN)?;
    check_optional_len(
        "external_id",
        workout.external_id.as_deref(),
        w::EXTERNAL_ID_LEN,
    )?;
    validate_workout_metrics(&workout.metrics)
}

/// Validate the fields a workout update sets
///
/// # Errors
///
/// Returns the first invalid field
pub fn validate_workout_update(update: &WorkoutUpdate) -> AppResult<()> {
    validate_workout_metrics(&update.metrics)
}

/// Validate a fueling event before it is recorded
///
/// # Errors
///
/// Returns the first invalid field
pub fn validate_fueling_event(event: &NewFuelingEvent) -> AppResult<()> {
    use limits::fueling_event as e;

    let (min_offset, max_offset) = e::MINUTE_OFFSET;
    if !(min_offset..=max_offset).contains(&event.minute_offset) {
        return Err(AppError::value_out_of_range(
            "minute_offset",
            f64::from(event.minute_offset),
            f64::from(min_offset),
            f64::from(max_offset),
        ));
    }
    check_optional_len("food_name", event.food_name.as_deref(), e::FOOD_NAME_LEN)?;
    check_range("carbs_g", event.carbs_g, e::CARBS_G)?;
    check_range("fluid_ml", event.fluid_ml, e::FLUID_ML)?;
    check_range("sodium_mg", event.sodium_mg, e::SODIUM_MG)?;
    check_optional_len("notes", event.notes.as_deref(), e::NOTES_LEN)
}
