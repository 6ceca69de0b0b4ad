// ABOUTME: Integration tests for intensity normalization across RPE, HR, power, and pace modes
// ABOUTME: Covers band interpolation, landmark mapping, and the perceived-exertion fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{approx, reference_profile};
use fuelcast::intelligence::config::IntensityConfig;
use fuelcast::intelligence::intensity::{normalize, EffortSource};
use fuelcast::models::{IntensityMode, SessionContext, SportType};

#[test]
fn test_rpe_mode_passes_through() {
    let session = SessionContext::new(SportType::Running, 60, 6.5);
    let result = normalize(&session, &reference_profile(), &IntensityConfig::default());
    assert!(approx(result.effort, 6.5, 1e-9));
    assert_eq!(result.source, EffortSource::PerceivedExertion);
}

#[test]
fn test_rpe_below_scale_is_clamped_to_one() {
    let session = SessionContext::new(SportType::Gym, 45, 0.2);
    let result = normalize(&session, &reference_profile(), &IntensityConfig::default());
    assert!(approx(result.effort, 1.0, 1e-9));
}

#[test]
fn test_power_at_ninety_percent_ftp() {
    let mut session = SessionContext::new(SportType::Cycling, 90, 4.0);
    session.intensity_mode = IntensityMode::Power;
    session.target_power_watts = Some(252.0);
    let mut profile = reference_profile();
    profile.bike_ftp_w = Some(280.0);

    let result = normalize(&session, &profile, &IntensityConfig::default());
    assert!(approx(result.effort, 6.8, 1e-9));
    assert_eq!(result.source, EffortSource::PowerFtp);
}

#[test]
fn test_power_uses_average_when_no_target() {
    let mut session = SessionContext::new(SportType::Cycling, 90, 4.0);
    session.intensity_mode = IntensityMode::Power;
    session.avg_power_watts = Some(280.0);
    let mut profile = reference_profile();
    profile.bike_ftp_w = Some(280.0);

    let result = normalize(&session, &profile, &IntensityConfig::default());
    // ratio 1.0 sits two thirds into the 0.9-1.05 band
    assert!(approx(result.effort, 6.8 + (8.4 - 6.8) * (0.1 / 0.15), 1e-6));
}

#[test]
fn test_power_without_ftp_falls_back_to_rpe() {
    let mut session = SessionContext::new(SportType::Cycling, 90, 4.0);
    session.intensity_mode = IntensityMode::Power;
    session.target_power_watts = Some(252.0);

    let result = normalize(&session, &reference_profile(), &IntensityConfig::default());
    assert!(approx(result.effort, 4.0, 1e-9));
    assert_eq!(result.source, EffortSource::PerceivedExertion);
}

#[test]
fn test_run_power_uses_run_ftp() {
    let mut session = SessionContext::new(SportType::Running, 60, 3.0);
    session.intensity_mode = IntensityMode::Power;
    session.target_power_watts = Some(252.0);
    let mut profile = reference_profile();
    profile.bike_ftp_w = Some(400.0);
    profile.run_ftp_w = Some(280.0);

    let result = normalize(&session, &profile, &IntensityConfig::default());
    assert!(approx(result.effort, 6.8, 1e-9));
}

#[test]
fn test_pace_at_threshold() {
    let mut session = SessionContext::new(SportType::Running, 60, 3.0);
    session.intensity_mode = IntensityMode::Pace;
    session.target_pace_sec_per_km = Some(240.0);
    let mut profile = reference_profile();
    profile.run_threshold_pace_sec_per_km = Some(240.0);

    let result = normalize(&session, &profile, &IntensityConfig::default());
    assert!(approx(result.effort, 7.0, 1e-9));
    assert_eq!(result.source, EffortSource::PaceThreshold);
}

#[test]
fn test_faster_pace_means_harder_effort() {
    let mut profile = reference_profile();
    profile.run_threshold_pace_sec_per_km = Some(240.0);
    let effort_at = |pace: f64| {
        let mut session = SessionContext::new(SportType::TrailRunning, 60, 3.0);
        session.intensity_mode = IntensityMode::Pace;
        session.target_pace_sec_per_km = Some(pace);
        normalize(&session, &profile, &IntensityConfig::default()).effort
    };
    assert!(effort_at(220.0) > effort_at(240.0));
    assert!(effort_at(240.0) > effort_at(300.0));
}

#[test]
fn test_pace_ignored_for_cycling() {
    let mut session = SessionContext::new(SportType::Cycling, 60, 5.5);
    session.intensity_mode = IntensityMode::Pace;
    session.target_pace_sec_per_km = Some(240.0);
    let mut profile = reference_profile();
    profile.run_threshold_pace_sec_per_km = Some(240.0);

    let result = normalize(&session, &profile, &IntensityConfig::default());
    assert_eq!(result.source, EffortSource::PerceivedExertion);
    assert!(approx(result.effort, 5.5, 1e-9));
}

#[test]
fn test_hr_between_thresholds_interpolates() {
    let mut session = SessionContext::new(SportType::Running, 60, 3.0);
    session.intensity_mode = IntensityMode::Hr;
    session.target_heart_rate_bpm = Some(164.0);
    let mut profile = reference_profile();
    profile.run_lt1_hr_bpm = Some(150.0);
    profile.run_lt2_hr_bpm = Some(178.0);

    let result = normalize(&session, &profile, &IntensityConfig::default());
    assert_eq!(result.source, EffortSource::HeartRateThresholds);
    // halfway between LT1 and LT2
    assert!(approx(result.effort, 5.6, 1e-9));
}

#[test]
fn test_hr_without_landmarks_uses_max_hr_ratio() {
    let mut session = SessionContext::new(SportType::Swimming, 60, 3.0);
    session.intensity_mode = IntensityMode::Hr;
    session.avg_heart_rate_bpm = Some(150.0);
    session.max_heart_rate_bpm = Some(200.0);

    let result = normalize(&session, &reference_profile(), &IntensityConfig::default());
    assert_eq!(result.source, EffortSource::HeartRateMax);
    assert!(approx(result.effort, 6.1, 1e-9));
}

#[test]
fn test_hr_without_any_reference_falls_back() {
    let mut session = SessionContext::new(SportType::Swimming, 60, 3.5);
    session.intensity_mode = IntensityMode::Hr;
    session.target_heart_rate_bpm = Some(150.0);

    let result = normalize(&session, &reference_profile(), &IntensityConfig::default());
    assert_eq!(result.source, EffortSource::PerceivedExertion);
    assert!(approx(result.effort, 3.5, 1e-9));
}

#[test]
fn test_effort_always_within_bounds() {
    let mut profile = reference_profile();
    profile.bike_ftp_w = Some(150.0);
    for watts in [40.0, 100.0, 200.0, 400.0, 700.0] {
        let mut session = SessionContext::new(SportType::Cycling, 60, 5.0);
        session.intensity_mode = IntensityMode::Power;
        session.target_power_watts = Some(watts);
        let effort = normalize(&session, &profile, &IntensityConfig::default()).effort;
        assert!((1.0..=10.0).contains(&effort), "effort {effort} for {watts} W");
    }
}
