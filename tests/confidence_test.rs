// ABOUTME: Integration tests for the confidence band estimator
// ABOUTME: Missing-input penalties, science vs standard centers, bounds, and monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{approx, reference_request};
use fuelcast::intelligence::confidence::estimate;
use fuelcast::intelligence::config::ConfidenceConfig;
use fuelcast::models::PredictionRequest;

fn fully_described() -> PredictionRequest {
    let mut request = reference_request();
    request.profile.vo2max = Some(58.0);
    request.profile.lactate_threshold_pct = Some(86.0);
    request.profile.sleep_hours = Some(7.5);
    request.profile.hrv_score = Some(62.0);
    request.profile.bike_ftp_w = Some(280.0);
    request.session.avg_power_watts = Some(210.0);
    request
}

#[test]
fn test_sparse_profile_band() {
    let band = estimate(&reference_request(), &ConfidenceConfig::default());
    assert!(approx(band.uncertainty, 0.29, 1e-9));
    assert!(approx(band.low, 0.50, 1e-9));
    assert!(approx(band.high, 0.99, 1e-9));
    assert_eq!(band.notes.len(), 6);
}

#[test]
fn test_complete_profile_band() {
    let band = estimate(&fully_described(), &ConfidenceConfig::default());
    assert!(approx(band.uncertainty, 0.13, 1e-9));
    assert!(approx(band.low, 0.66, 1e-9));
    assert!(approx(band.high, 0.92, 1e-9));
    assert!(band.notes.is_empty());
}

#[test]
fn test_standard_mode_centers_lower() {
    let mut request = fully_described();
    request.science_mode = false;
    let band = estimate(&request, &ConfidenceConfig::default());
    assert!(approx(band.low, 0.60, 1e-9));
    assert!(approx(band.high, 0.86, 1e-9));
}

#[test]
fn test_each_added_input_narrows_or_keeps_band() {
    let config = ConfidenceConfig::default();
    let mut request = reference_request();
    let mut previous = estimate(&request, &config).uncertainty;

    let steps: [fn(&mut PredictionRequest); 6] = [
        |r| r.profile.vo2max = Some(58.0),
        |r| r.profile.lactate_threshold_pct = Some(86.0),
        |r| r.profile.sleep_hours = Some(7.5),
        |r| r.profile.hrv_score = Some(62.0),
        |r| r.session.avg_heart_rate_bpm = Some(140.0),
        |r| r.profile.run_ftp_w = Some(260.0),
    ];
    for step in steps {
        step(&mut request);
        let band = estimate(&request, &config);
        assert!(band.uncertainty < previous);
        assert!(band.low <= band.high);
        previous = band.uncertainty;
    }
}

#[test]
fn test_notes_name_missing_inputs() {
    let mut request = reference_request();
    request.profile.vo2max = Some(58.0);
    let band = estimate(&request, &ConfidenceConfig::default());
    assert!(!band.notes.iter().any(|n| n.starts_with("VO2max")));
    assert!(band.notes.iter().any(|n| n.starts_with("FTP missing")));
    assert!(band.notes.iter().any(|n| n.contains("telemetry")));
}

#[test]
fn test_band_independent_of_session_shape() {
    let config = ConfidenceConfig::default();
    let short = estimate(&reference_request(), &config);
    let mut long_request = reference_request();
    long_request.session.duration_minutes = 600;
    long_request.session.intensity_rpe = 9.5;
    let long = estimate(&long_request, &config);
    assert!(approx(short.low, long.low, 1e-12));
    assert!(approx(short.high, long.high, 1e-12));
}
