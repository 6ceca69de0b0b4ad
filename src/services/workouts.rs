// ABOUTME: Workout service validating sessions and fueling events before they reach the store
// ABOUTME: Resolves listing limits and analytics windows into store queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::constants::defaults::{
    ANALYTICS_DAYS, ANALYTICS_DAYS_MAX, ANALYTICS_DAYS_MIN, WORKOUT_LIST_LIMIT, WORKOUT_LIST_MAX,
};
use crate::errors::{AppError, AppResult};
use crate::validation;
use crate::workouts::{
    AnalyticsSummary, ChartSeries, FuelingEvent, NewFuelingEvent, NewWorkout, Workout,
    WorkoutFilter, WorkoutStatus, WorkoutStore, WorkoutUpdate,
};

use super::rejected;

/// Workout log operations for one athlete identity
#[derive(Clone)]
pub struct WorkoutService {
    workouts: Arc<dyn WorkoutStore>,
}

/// Start of a trailing `days` window ending now
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `days` is outside `7..=365`
pub fn analytics_window(days: Option<u32>) -> AppResult<DateTime<Utc>> {
    let days = days.unwrap_or(ANALYTICS_DAYS);
    if !(ANALYTICS_DAYS_MIN..=ANALYTICS_DAYS_MAX).contains(&days) {
        return Err(AppError::value_out_of_range(
            "days",
            f64::from(days),
            f64::from(ANALYTICS_DAYS_MIN),
            f64::from(ANALYTICS_DAYS_MAX),
        ));
    }
    Ok(Utc::now() - Duration::days(i64::from(days)))
}

impl WorkoutService {
    /// Service over a workout store
    #[must_use]
    pub fn new(workouts: Arc<dyn WorkoutStore>) -> Self {
        Self { workouts }
    }

    /// Validate and log a workout
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first out-of-range field
    pub async fn create(&self, athlete_id: &str, workout: NewWorkout) -> AppResult<Workout> {
        validation::validate_workout(&workout).map_err(|e| rejected(athlete_id, e))?;
        self.workouts.add(athlete_id, workout).await
    }

    /// One of the athlete's workouts
    ///
    /// # Errors
    ///
    /// Unknown or foreign ids are not found
    pub async fn get(&self, athlete_id: &str, workout_id: u64) -> AppResult<Workout> {
        self.workouts.get(athlete_id, workout_id).await
    }

    /// Validate and apply a partial update
    ///
    /// # Errors
    ///
    /// Returns a validation error, or not found for unknown or foreign ids
    pub async fn update(
        &self,
        athlete_id: &str,
        workout_id: u64,
        update: &WorkoutUpdate,
    ) -> AppResult<Workout> {
        validation::validate_workout_update(update).map_err(|e| rejected(athlete_id, e))?;
        self.workouts.update(athlete_id, workout_id, update).await
    }

    /// The athlete's workouts, latest start first
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `limit` is outside `1..=500`
    pub async fn list(
        &self,
        athlete_id: &str,
        limit: Option<usize>,
        status: Option<WorkoutStatus>,
        source: Option<String>,
    ) -> AppResult<Vec<Workout>> {
        let limit = limit.unwrap_or(WORKOUT_LIST_LIMIT);
        if !(1..=WORKOUT_LIST_MAX).contains(&limit) {
            return Err(AppError::value_out_of_range(
                "limit",
                limit as f64,
                1.0,
                WORKOUT_LIST_MAX as f64,
            ));
        }
        let filter = WorkoutFilter {
            limit,
            status,
            source: source.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()),
        };
        Ok(self.workouts.list(athlete_id, &filter).await)
    }

    /// Validate and record a fueling event
    ///
    /// # Errors
    ///
    /// Returns a validation error, or not found when the workout is not the athlete's
    pub async fn add_event(
        &self,
        athlete_id: &str,
        workout_id: u64,
        event: NewFuelingEvent,
    ) -> AppResult<FuelingEvent> {
        validation::validate_fueling_event(&event).map_err(|e| rejected(athlete_id, e))?;
        self.workouts.add_event(athlete_id, workout_id, event).await
    }

    /// Fueling events of one workout
    ///
    /// # Errors
    ///
    /// Not found when the workout is not the athlete's
    pub async fn list_events(
        &self,
        athlete_id: &str,
        workout_id: u64,
    ) -> AppResult<Vec<FuelingEvent>> {
        self.workouts.list_events(athlete_id, workout_id).await
    }

    /// Delete a fueling event
    ///
    /// # Errors
    ///
    /// Not found when the workout or event does not exist for the athlete
    pub async fn delete_event(
        &self,
        athlete_id: &str,
        workout_id: u64,
        event_id: u64,
    ) -> AppResult<()> {
        self.workouts
            .delete_event(athlete_id, workout_id, event_id)
            .await
    }

    /// Completed-session summary over the trailing window
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `days` is outside `7..=365`
    pub async fn summary(
        &self,
        athlete_id: &str,
        days: Option<u32>,
    ) -> AppResult<AnalyticsSummary> {
        let since = analytics_window(days).map_err(|e| rejected(athlete_id, e))?;
        Ok(self.workouts.summary(athlete_id, since).await)
    }

    /// Per-day chart series over the trailing window
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `days` is outside `7..=365`
    pub async fn chart_series(
        &self,
        athlete_id: &str,
        days: Option<u32>,
    ) -> AppResult<ChartSeries> {
        let since = analytics_window(days).map_err(|e| rejected(athlete_id, e))?;
        Ok(self.workouts.chart_series(athlete_id, since).await)
    }
}
