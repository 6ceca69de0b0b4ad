// ABOUTME: Integration tests for the in-memory workout log and its analytics
// ABOUTME: Ownership, partial updates, listing order, fueling events, summary, and chart series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use common::approx;
use fuelcast::errors::ErrorCode;
use fuelcast::models::SportType;
use fuelcast::services::workouts::analytics_window;
use fuelcast::validation::{validate_fueling_event, validate_workout, validate_workout_update};
use fuelcast::workouts::{
    AnalyticsSummary, ChartSeries, InMemoryWorkoutStore, NewFuelingEvent, NewWorkout, Workout,
    WorkoutFilter, WorkoutMetrics, WorkoutStatus, WorkoutStore, WorkoutUpdate,
};

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

fn all(limit: usize) -> WorkoutFilter {
    WorkoutFilter {
        limit,
        status: None,
        source: None,
    }
}

fn logged(
    id: u64,
    status: WorkoutStatus,
    start_time: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    metrics: WorkoutMetrics,
) -> Workout {
    let mut workout = NewWorkout::new(SportType::Cycling);
    workout.status = status;
    workout.start_time = start_time;
    workout.metrics = metrics;
    Workout::new(id, workout, created_at)
}

fn gel(minute_offset: u32) -> NewFuelingEvent {
    NewFuelingEvent {
        minute_offset,
        food_name: Some(" Energy Gel 25 ".to_owned()),
        carbs_g: 25.0,
        sodium_mg: 120.0,
        ..NewFuelingEvent::default()
    }
}

#[tokio::test]
async fn test_add_defaults_and_ownership() {
    let store = InMemoryWorkoutStore::new();
    let mut run = NewWorkout::new(SportType::Running);
    run.source = " strava ".to_owned();
    run.external_id = Some(" 998 ".to_owned());

    let first = store.add("alice", NewWorkout::new(SportType::Cycling)).await.unwrap();
    let second = store.add("alice", run).await.unwrap();
    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(first.source, "manual");
    assert_eq!(first.status, WorkoutStatus::Completed);
    assert_eq!(second.source, "strava");
    assert_eq!(second.external_id.as_deref(), Some("998"));

    assert_eq!(store.get("alice", 2).await.unwrap(), second);
    let err = store.get("bob", 2).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, "Workout 2 not found");
    assert!(store.get("alice", 99).await.is_err());
}

#[tokio::test]
async fn test_update_replaces_only_fields_it_sets() {
    let store = InMemoryWorkoutStore::new();
    let mut ride = NewWorkout::new(SportType::Cycling);
    ride.metrics.duration_minutes = Some(60.0);
    ride.metrics.avg_heart_rate_bpm = Some(140.0);
    let ride = store.add("alice", ride).await.unwrap();

    let update = WorkoutUpdate {
        status: Some(WorkoutStatus::Planned),
        start_time: Some(at(2020, 5, 1, 7)),
        metrics: WorkoutMetrics {
            avg_heart_rate_bpm: Some(150.0),
            notes: Some("windy".to_owned()),
            ..WorkoutMetrics::default()
        },
    };
    let updated = store.update("alice", ride.id, &update).await.unwrap();
    assert_eq!(updated.status, WorkoutStatus::Planned);
    assert_eq!(updated.start_time, Some(at(2020, 5, 1, 7)));
    assert_eq!(updated.metrics.avg_heart_rate_bpm, Some(150.0));
    assert_eq!(updated.metrics.duration_minutes, Some(60.0));
    assert_eq!(updated.metrics.notes.as_deref(), Some("windy"));
    assert_eq!(updated.created_at, ride.created_at);

    let err = store
        .update("bob", ride.id, &WorkoutUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(store.get("alice", ride.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_list_latest_start_first_with_filters() {
    let store = InMemoryWorkoutStore::new();
    let mut early = NewWorkout::new(SportType::Cycling);
    early.start_time = Some(at(2020, 5, 1, 7));
    let early = store.add("alice", early).await.unwrap();

    // No start time: ordered by when it was logged, which is now
    let unscheduled = store.add("alice", NewWorkout::new(SportType::Gym)).await.unwrap();

    let mut planned = NewWorkout::new(SportType::Running);
    planned.status = WorkoutStatus::Planned;
    planned.source = "strava".to_owned();
    planned.start_time = Some(at(2020, 5, 3, 7));
    let planned = store.add("alice", planned).await.unwrap();
    store.add("bob", NewWorkout::new(SportType::Hiking)).await.unwrap();

    let ids: Vec<u64> = store.list("alice", &all(100)).await.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![unscheduled.id, planned.id, early.id]);
    assert_eq!(store.list("alice", &all(1)).await, vec![unscheduled.clone()]);

    let by_status = WorkoutFilter {
        status: Some(WorkoutStatus::Planned),
        ..all(100)
    };
    assert_eq!(store.list("alice", &by_status).await, vec![planned]);

    let by_source = WorkoutFilter {
        source: Some("manual".to_owned()),
        ..all(100)
    };
    let manual: Vec<u64> = store.list("alice", &by_source).await.iter().map(|w| w.id).collect();
    assert_eq!(manual, vec![unscheduled.id, early.id]);

    assert_eq!(store.list("carol", &all(100)).await, Vec::new());
}

#[tokio::test]
async fn test_fueling_events_by_minute_offset() {
    let store = InMemoryWorkoutStore::new();
    let ride = store.add("alice", NewWorkout::new(SportType::Cycling)).await.unwrap();

    let late = store.add_event("alice", ride.id, gel(45)).await.unwrap();
    let early = store.add_event("alice", ride.id, gel(15)).await.unwrap();
    assert_eq!(early.workout_id, ride.id);
    assert_eq!(early.food_name.as_deref(), Some("Energy Gel 25"));

    let offsets: Vec<u32> = store
        .list_events("alice", ride.id)
        .await
        .unwrap()
        .iter()
        .map(|e| e.minute_offset)
        .collect();
    assert_eq!(offsets, vec![15, 45]);

    let err = store.list_events("bob", ride.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(store.add_event("bob", ride.id, gel(5)).await.is_err());
    assert!(store.add_event("alice", 99, gel(5)).await.is_err());

    assert!(store.delete_event("bob", ride.id, late.id).await.is_err());
    let err = store.delete_event("alice", ride.id, 99).await.unwrap_err();
    assert_eq!(err.message, "Fueling event 99 not found");

    store.delete_event("alice", ride.id, late.id).await.unwrap();
    assert!(store.delete_event("alice", ride.id, late.id).await.is_err());
    assert_eq!(store.list_events("alice", ride.id).await.unwrap(), vec![early]);
}

#[test]
fn test_summary_counts_completed_sessions_only() {
    let logged_at = at(2020, 5, 10, 12);
    let workouts = [
        logged(
            1,
            WorkoutStatus::Completed,
            None,
            logged_at,
            WorkoutMetrics {
                duration_minutes: Some(60.0),
                avg_heart_rate_bpm: Some(140.0),
                avg_power_watts: Some(200.0),
                intensity_rpe: Some(6.0),
                distance_km: Some(30.0),
                completed_carbs_g: Some(60.0),
                ..WorkoutMetrics::default()
            },
        ),
        logged(
            2,
            WorkoutStatus::Completed,
            None,
            logged_at,
            WorkoutMetrics {
                duration_minutes: Some(90.0),
                avg_power_watts: Some(250.0),
                intensity_rpe: Some(7.0),
                distance_km: Some(45.5),
                ..WorkoutMetrics::default()
            },
        ),
        logged(
            3,
            WorkoutStatus::Planned,
            None,
            logged_at,
            WorkoutMetrics {
                duration_minutes: Some(120.0),
                avg_heart_rate_bpm: Some(160.0),
                distance_km: Some(50.0),
                completed_carbs_g: Some(100.0),
                ..WorkoutMetrics::default()
            },
        ),
    ];

    let summary = AnalyticsSummary::from_workouts(&workouts);
    assert_eq!(summary.sessions, 2);
    assert!(approx(summary.avg_duration_minutes, 75.0, 1e-9));
    // Only the first workout reports heart rate
    assert!(approx(summary.avg_heart_rate_bpm, 140.0, 1e-9));
    assert!(approx(summary.avg_power_watts, 225.0, 1e-9));
    assert!(approx(summary.avg_rpe, 6.5, 1e-9));
    assert!(approx(summary.total_distance_km, 75.5, 1e-9));
    assert!(approx(summary.total_carbs_g, 60.0, 1e-9));

    assert_eq!(AnalyticsSummary::from_workouts(&[]), AnalyticsSummary::default());
}

#[test]
fn test_chart_series_groups_by_start_day() {
    let workouts = [
        logged(
            3,
            WorkoutStatus::Planned,
            None,
            at(2020, 5, 3, 9),
            WorkoutMetrics {
                duration_minutes: Some(30.0),
                ..WorkoutMetrics::default()
            },
        ),
        logged(
            1,
            WorkoutStatus::Completed,
            Some(at(2020, 5, 1, 7)),
            at(2020, 5, 4, 9),
            WorkoutMetrics {
                duration_minutes: Some(60.0),
                avg_heart_rate_bpm: Some(141.0),
                distance_km: Some(20.0),
                completed_carbs_g: Some(30.04),
                ..WorkoutMetrics::default()
            },
        ),
        logged(
            2,
            WorkoutStatus::Completed,
            Some(at(2020, 5, 1, 18)),
            at(2020, 5, 4, 9),
            WorkoutMetrics {
                duration_minutes: Some(45.5),
                avg_heart_rate_bpm: Some(142.25),
                avg_power_watts: Some(180.0),
                distance_km: Some(10.06),
                completed_carbs_g: Some(20.0),
                ..WorkoutMetrics::default()
            },
        ),
    ];

    let charts = ChartSeries::from_workouts(&workouts);
    assert_eq!(
        charts.labels,
        vec![
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 5, 3).unwrap()
        ]
    );
    // (141 + 142.25) / 2 = 141.625, shown to one decimal
    assert!(approx(charts.avg_hr[0], 141.6, 1e-9));
    assert!(approx(charts.avg_power[0], 180.0, 1e-9));
    assert!(approx(charts.total_minutes[0], 105.5, 1e-9));
    assert!(approx(charts.carbs_g[0], 50.0, 1e-9));
    assert!(approx(charts.distance_km[0], 30.1, 1e-9));
    assert!(approx(charts.avg_hr[1], 0.0, 1e-9));
    assert!(approx(charts.total_minutes[1], 30.0, 1e-9));

    let json = serde_json::to_value(&charts).unwrap();
    assert_eq!(json["labels"][0], "2020-05-01");
}

#[tokio::test]
async fn test_store_window_is_anchored_on_log_time() {
    let store = InMemoryWorkoutStore::new();
    let mut ride = NewWorkout::new(SportType::Cycling);
    // Started long ago, logged now
    ride.start_time = Some(at(2020, 5, 1, 7));
    ride.metrics.duration_minutes = Some(90.0);
    store.add("alice", ride).await.unwrap();

    let last_week = Utc::now() - Duration::days(7);
    assert_eq!(store.summary("alice", last_week).await.sessions, 1);
    let charts = store.chart_series("alice", last_week).await;
    assert_eq!(charts.labels, vec![NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()]);

    let later = Utc::now() + Duration::hours(1);
    assert_eq!(store.summary("alice", later).await.sessions, 0);
    assert!(store.chart_series("alice", later).await.labels.is_empty());
    assert_eq!(store.summary("bob", last_week).await.sessions, 0);
}

#[test]
fn test_analytics_window_bounds() {
    let err = analytics_window(Some(6)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.field.as_deref(), Some("days"));
    assert!(analytics_window(Some(366)).is_err());

    let since = analytics_window(Some(365)).unwrap();
    assert!(since < Utc::now() - Duration::days(364));

    let default = analytics_window(None).unwrap();
    let expected = Utc::now() - Duration::days(30);
    assert!((expected - default).num_seconds().abs() < 5);
}

#[test]
fn test_workout_validation_names_the_field() {
    let mut workout = NewWorkout::new(SportType::Running);
    workout.metrics.avg_heart_rate_bpm = Some(300.0);
    let err = validate_workout(&workout).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.field.as_deref(), Some("avg_heart_rate_bpm"));

    let mut workout = NewWorkout::new(SportType::Running);
    workout.source = "  ".to_owned();
    let err = validate_workout(&workout).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("source"));

    let mut workout = NewWorkout::new(SportType::Running);
    workout.metrics.distance_km = Some(-1.0);
    workout.metrics.temperature_c = Some(30.0);
    let err = validate_workout(&workout).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("distance_km"));

    let update = WorkoutUpdate {
        metrics: WorkoutMetrics {
            intensity_rpe: Some(f64::NAN),
            ..WorkoutMetrics::default()
        },
        ..WorkoutUpdate::default()
    };
    let err = validate_workout_update(&update).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(validate_workout_update(&WorkoutUpdate::default()).is_ok());
}

#[test]
fn test_fueling_event_limits() {
    assert!(validate_fueling_event(&gel(3000)).is_ok());

    let err = validate_fueling_event(&gel(3001)).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("minute_offset"));

    let mut heavy = gel(30);
    heavy.carbs_g = 301.0;
    let err = validate_fueling_event(&heavy).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("carbs_g"));

    let mut salty = gel(30);
    salty.sodium_mg = 6000.5;
    assert!(validate_fueling_event(&salty).is_err());
}
