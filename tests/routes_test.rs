// ABOUTME: HTTP route tests driving the full router with tower oneshot requests
// ABOUTME: Health, predict, simulate, audit, foods, profile, workouts, analytics, and error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::error::Error;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use common::{reference_request, test_resources};
use fuelcast::resources::ServerResources;
use fuelcast::routes::router;
use http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn Error>>;

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    athlete: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value), Box<dyn Error>> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(athlete) = athlete {
        builder = builder.header("x-athlete-id", athlete);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

fn app() -> (Router, Arc<ServerResources>) {
    let resources = test_resources();
    (router(Arc::clone(&resources)), resources)
}

#[tokio::test]
async fn test_health_and_ready() -> TestResult {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fuelcast-server");

    let (status, body) = send(&app, Method::GET, "/ready", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    Ok(())
}

#[tokio::test]
async fn test_predict_returns_strategies_and_schedule() -> TestResult {
    let (app, _) = app();
    let request = serde_json::to_value(reference_request())?;
    let (status, body) = send(&app, Method::POST, "/api/v1/predict", None, Some(request)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["strategies"].as_array().unwrap().len(), 3);
    assert_eq!(body["strategies"][1]["strategy"], "balanced");
    assert_eq!(body["strategies"][1]["hydration_ml_per_hour"], 1077.0);
    assert_eq!(body["fueling_schedule"].as_array().unwrap().len(), 9);
    assert_eq!(body["fueling_schedule"][1]["food_name"], "Rice Cake Sports");
    assert_eq!(body["confidence_low"], 0.5);
    Ok(())
}

#[tokio::test]
async fn test_predict_with_session_only_uses_stored_profile() -> TestResult {
    let (app, _) = app();
    let draft = json!({
        "session": { "sport": "running", "duration_minutes": 75, "intensity_rpe": 7.0 }
    });
    let (status, body) = send(&app, Method::POST, "/api/v1/predict", Some("alice"), Some(draft)).await?;
    assert_eq!(status, StatusCode::OK);
    // default profile lacks only sleep and HRV; no telemetry was sent
    assert_eq!(body["uncertainty_notes"].as_array().unwrap().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_predict_out_of_range_is_400_with_field() -> TestResult {
    let (app, _) = app();
    let mut request = serde_json::to_value(reference_request())?;
    request["session"]["intensity_rpe"] = json!(12.0);
    let (status, body) = send(&app, Method::POST, "/api/v1/predict", None, Some(request)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["field"], "session.intensity_rpe");
    assert_eq!(body["error"]["details"]["max"], 10.0);
    Ok(())
}

#[tokio::test]
async fn test_simulate_returns_delta() -> TestResult {
    let (app, _) = app();
    let request = json!({
        "base_request": serde_json::to_value(reference_request())?,
        "hotter_by_c": 8.0
    });
    let (status, body) = send(&app, Method::POST, "/api/v1/simulate", None, Some(request)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delta"]["hydration_ml_per_hour"], 144.0);
    assert_eq!(body["delta_summary"][1], "Hydration change: +144 ml/h");
    Ok(())
}

#[tokio::test]
async fn test_audit_is_scoped_by_athlete_header() -> TestResult {
    let (app, _) = app();
    let request = serde_json::to_value(reference_request())?;
    let (_, predicted) = send(
        &app,
        Method::POST,
        "/api/v1/predict",
        Some("alice"),
        Some(request),
    )
    .await?;

    let (status, body) = send(&app, Method::GET, "/api/v1/audit", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["athlete_id"], "alice");
    assert_eq!(body["items"][0]["recommendation_id"], predicted["recommendation_id"]);
    assert_eq!(body["items"][0]["kind"], "prediction");

    let (_, anonymous) = send(&app, Method::GET, "/api/v1/audit", None, None).await?;
    assert_eq!(anonymous["athlete_id"], "anonymous");
    assert!(anonymous["items"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, Method::GET, "/api/v1/audit?limit=0", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "limit");
    Ok(())
}

#[tokio::test]
async fn test_food_crud() -> TestResult {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/foods", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);

    let food = json!({
        "name": "Maple Gel",
        "category": "gel",
        "serving_desc": "1 sachet",
        "carbs_g": 28.0,
        "sodium_mg": 100.0,
        "fluid_ml": 0.0
    });
    let (status, body) = send(&app, Method::POST, "/api/v1/foods", Some("alice"), Some(food)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["is_builtin"], false);
    let id = body["item"]["id"].as_u64().unwrap();

    let (_, custom) = send(
        &app,
        Method::GET,
        "/api/v1/foods?scope=custom",
        Some("alice"),
        None,
    )
    .await?;
    assert_eq!(custom["items"][0]["name"], "Maple Gel");

    let uri = format!("/api/v1/foods/{id}");
    let (status, _) = send(&app, Method::DELETE, &uri, Some("bob"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/foods/1", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "PERMISSION_DENIED");
    Ok(())
}

#[tokio::test]
async fn test_invalid_food_rejected() -> TestResult {
    let (app, _) = app();
    let food = json!({
        "name": "X",
        "category": "gel",
        "serving_desc": "1",
        "carbs_g": 28.0,
        "sodium_mg": 100.0,
        "fluid_ml": 0.0
    });
    let (status, body) = send(&app, Method::POST, "/api/v1/foods", None, Some(food)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "name");
    Ok(())
}

#[tokio::test]
async fn test_profile_get_and_update() -> TestResult {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/profile", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["athlete_id"], "alice");
    assert_eq!(body["profile"]["profile"]["body_mass_kg"], 72.0);

    let update = json!({ "body_mass_kg": 66.0, "default_indoor": true });
    let (status, body) = send(&app, Method::PUT, "/api/v1/profile", Some("alice"), Some(update)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["profile"]["body_mass_kg"], 66.0);
    assert_eq!(body["profile"]["default_indoor"], true);
    assert!(body["profile"]["updated_at"].is_string());

    let (_, bob) = send(&app, Method::GET, "/api/v1/profile", Some("bob"), None).await?;
    assert_eq!(bob["profile"]["profile"]["body_mass_kg"], 72.0);

    let bad = json!({ "body_mass_kg": 500.0 });
    let (status, body) = send(&app, Method::PUT, "/api/v1/profile", Some("alice"), Some(bad)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "profile.body_mass_kg");
    Ok(())
}

#[tokio::test]
async fn test_blank_athlete_header_is_anonymous() -> TestResult {
    let (app, _) = app();
    let (_, body) = send(&app, Method::GET, "/api/v1/profile", Some("   "), None).await?;
    assert_eq!(body["athlete_id"], "anonymous");
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_404() -> TestResult {
    let (app, _) = app();
    let (status, _) = send(&app, Method::GET, "/api/v1/nothing", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_workout_crud_and_fueling_events() -> TestResult {
    let (app, _) = app();
    let ride = json!({
        "sport": "cycling",
        "start_time": "2020-05-01T07:00:00Z",
        "duration_minutes": 90.0,
        "avg_heart_rate_bpm": 145.0,
        "completed_carbs_g": 80.0
    });
    let (status, body) = send(&app, Method::POST, "/api/v1/workouts", Some("alice"), Some(ride)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["source"], "manual");
    assert_eq!(body["item"]["status"], "completed");
    assert_eq!(body["item"]["duration_minutes"], 90.0);
    let id = body["item"]["id"].as_u64().unwrap();
    let uri = format!("/api/v1/workouts/{id}");

    let (status, body) = send(&app, Method::GET, &uri, Some("bob"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    let update = json!({ "status": "planned", "notes": "legs heavy" });
    let (status, body) = send(&app, Method::PUT, &uri, Some("alice"), Some(update)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["status"], "planned");
    assert_eq!(body["item"]["notes"], "legs heavy");
    assert_eq!(body["item"]["avg_heart_rate_bpm"], 145.0);

    let fueling = format!("{uri}/fueling");
    let gel = json!({ "minute_offset": 30, "food_name": "Energy Gel 25", "carbs_g": 25.0 });
    let (status, body) = send(&app, Method::POST, &fueling, Some("alice"), Some(gel)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["workout_id"], id);
    assert_eq!(body["item"]["fluid_ml"], 0.0);
    let event_uri = format!("{fueling}/{}", body["item"]["id"]);

    let (status, body) = send(&app, Method::GET, &fueling, Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    let (status, _) = send(&app, Method::GET, &fueling, Some("bob"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &event_uri, Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let (status, _) = send(&app, Method::DELETE, &event_uri, Some("alice"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/api/v1/workouts?status=planned", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["id"], id);
    let (_, body) = send(&app, Method::GET, "/api/v1/workouts?status=completed", Some("alice"), None).await?;
    assert!(body["items"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_workout_inputs_out_of_range_are_400() -> TestResult {
    let (app, _) = app();
    let bad = json!({ "sport": "running", "avg_heart_rate_bpm": 300.0 });
    let (status, body) = send(&app, Method::POST, "/api/v1/workouts", None, Some(bad)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "avg_heart_rate_bpm");

    let run = json!({ "sport": "running" });
    let (_, body) = send(&app, Method::POST, "/api/v1/workouts", None, Some(run)).await?;
    let fueling = format!("/api/v1/workouts/{}/fueling", body["item"]["id"]);
    let late = json!({ "minute_offset": 3001 });
    let (status, body) = send(&app, Method::POST, &fueling, None, Some(late)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "minute_offset");

    for limit in [0, 501] {
        let uri = format!("/api/v1/workouts?limit={limit}");
        let (status, body) = send(&app, Method::GET, &uri, None, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    }
    Ok(())
}

#[tokio::test]
async fn test_analytics_summary_and_charts() -> TestResult {
    let (app, _) = app();
    for workout in [
        json!({ "sport": "cycling", "duration_minutes": 60.0, "avg_power_watts": 200.0, "distance_km": 30.0 }),
        json!({ "sport": "cycling", "duration_minutes": 90.0, "avg_power_watts": 220.0, "distance_km": 45.0 }),
        json!({ "sport": "running", "status": "planned", "duration_minutes": 45.0 }),
    ] {
        let (status, _) = send(&app, Method::POST, "/api/v1/workouts", Some("alice"), Some(workout)).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/api/v1/analytics/summary", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["sessions"], 2);
    assert_eq!(body["summary"]["avg_duration_minutes"], 75.0);
    assert_eq!(body["summary"]["avg_power_watts"], 210.0);
    assert_eq!(body["summary"]["total_distance_km"], 75.0);
    assert_eq!(body["summary"]["avg_heart_rate_bpm"], 0.0);

    // Planned sessions still appear in the charts; all three fall on today
    let (status, body) = send(&app, Method::GET, "/api/v1/analytics/charts?days=7", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["charts"]["labels"].as_array().unwrap().len(), 1);
    assert_eq!(body["charts"]["total_minutes"][0], 195.0);

    let (_, body) = send(&app, Method::GET, "/api/v1/analytics/summary", Some("bob"), None).await?;
    assert_eq!(body["summary"]["sessions"], 0);

    for uri in ["/api/v1/analytics/summary?days=6", "/api/v1/analytics/charts?days=366"] {
        let (status, body) = send(&app, Method::GET, uri, Some("alice"), None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "days");
    }
    Ok(())
}
