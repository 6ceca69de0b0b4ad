// ABOUTME: Integration tests for request, profile, environment, simulation, and food validation
// ABOUTME: Each rejection names the offending field and carries the allowed range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::reference_request;
use fuelcast::catalog::NewFoodItem;
use fuelcast::errors::ErrorCode;
use fuelcast::intelligence::config::Bounds;
use fuelcast::intelligence::simulation::perturb;
use fuelcast::models::SimulationRequest;
use fuelcast::validation::{
    validate_environment, validate_food, validate_profile, validate_request, validate_simulation,
};

fn gel() -> NewFoodItem {
    NewFoodItem {
        name: "Homemade Gel".to_owned(),
        category: "gel".to_owned(),
        serving_desc: "1 flask".to_owned(),
        carbs_g: 40.0,
        sodium_mg: 200.0,
        fluid_ml: 0.0,
        caffeine_mg: 0.0,
    }
}

#[test]
fn test_reference_request_is_valid() {
    assert!(validate_request(&reference_request()).is_ok());
}

#[test]
fn test_body_mass_bounds_are_exclusive() {
    let mut request = reference_request();
    request.profile.body_mass_kg = 30.0;
    let error = validate_profile(&request.profile).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("profile.body_mass_kg"));

    request.profile.body_mass_kg = 30.5;
    assert!(validate_profile(&request.profile).is_ok());
}

#[test]
fn test_optional_fields_checked_when_present() {
    let mut request = reference_request();
    request.profile.bike_ftp_w = Some(900.0);
    let error = validate_request(&request).unwrap_err();
    assert_eq!(error.context.field.as_deref(), Some("profile.bike_ftp_w"));
    assert_eq!(error.code.http_status(), 400);
}

#[test]
fn test_session_duration_limits() {
    let mut request = reference_request();
    request.session.duration_minutes = 5;
    let error = validate_request(&request).unwrap_err();
    assert_eq!(
        error.context.field.as_deref(),
        Some("session.duration_minutes")
    );

    request.session.duration_minutes = 1201;
    assert!(validate_request(&request).is_err());

    request.session.duration_minutes = 1200;
    assert!(validate_request(&request).is_ok());
}

#[test]
fn test_rpe_limits_and_non_finite_values() {
    let mut request = reference_request();
    request.session.intensity_rpe = 10.5;
    assert_eq!(
        validate_request(&request).unwrap_err().context.field.as_deref(),
        Some("session.intensity_rpe")
    );

    request.session.intensity_rpe = f64::NAN;
    let error = validate_request(&request).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_distance_rejected() {
    let mut request = reference_request();
    request.session.distance_km = Some(-1.0);
    assert_eq!(
        validate_request(&request).unwrap_err().context.field.as_deref(),
        Some("session.distance_km")
    );
}

#[test]
fn test_environment_limits() {
    let mut environment = reference_request().environment;
    environment.humidity_pct = 101.0;
    assert_eq!(
        validate_environment(&environment)
            .unwrap_err()
            .context
            .field
            .as_deref(),
        Some("environment.humidity_pct")
    );

    environment.humidity_pct = 50.0;
    environment.terrain_factor = 2.0;
    assert!(validate_environment(&environment).is_err());
}

#[test]
fn test_simulation_rejects_out_of_range_perturbation() {
    let simulation = SimulationRequest {
        base_request: reference_request(),
        hotter_by_c: 40.0,
        longer_by_minutes: 0,
        intensity_delta_rpe: 0.0,
    };
    let perturbed = perturb(&simulation, Bounds::new(1.0, 10.0));
    let error = validate_simulation(&simulation, &perturbed).unwrap_err();
    assert_eq!(
        error.context.field.as_deref(),
        Some("simulated.environment.temperature_c")
    );
    assert!(error.message.starts_with("Simulated request invalid"));
}

#[test]
fn test_simulation_rejects_too_short_result() {
    let simulation = SimulationRequest {
        base_request: reference_request(),
        hotter_by_c: 0.0,
        longer_by_minutes: -115,
        intensity_delta_rpe: 0.0,
    };
    let perturbed = perturb(&simulation, Bounds::new(1.0, 10.0));
    let error = validate_simulation(&simulation, &perturbed).unwrap_err();
    assert_eq!(
        error.context.field.as_deref(),
        Some("simulated.session.duration_minutes")
    );
}

#[test]
fn test_simulation_accepts_reasonable_what_if() {
    let simulation = SimulationRequest {
        base_request: reference_request(),
        hotter_by_c: 5.0,
        longer_by_minutes: 60,
        intensity_delta_rpe: 1.0,
    };
    let perturbed = perturb(&simulation, Bounds::new(1.0, 10.0));
    assert!(validate_simulation(&simulation, &perturbed).is_ok());
}

#[test]
fn test_food_validation() {
    assert!(validate_food(&gel()).is_ok());

    let short_name = NewFoodItem {
        name: "G".to_owned(),
        ..gel()
    };
    assert_eq!(
        validate_food(&short_name).unwrap_err().context.field.as_deref(),
        Some("name")
    );

    let sugary = NewFoodItem {
        carbs_g: 250.0,
        ..gel()
    };
    let error = validate_food(&sugary).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("carbs_g"));
}
