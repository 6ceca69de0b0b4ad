// ABOUTME: Workout log collaborator storing planned and completed sessions and their fueling events
// ABOUTME: Completed-session analytics summary and per-day chart series over a trailing window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout log.
//!
//! Workouts and their fueling events belong to the athlete that logged them;
//! another athlete's ids read as not found. Analytics windows are anchored on
//! when a workout was logged (`created_at`). Chart days are grouped by the
//! workout start time, or the log time when no start is known.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::intelligence::numeric::round_to;
use crate::models::SportType;

/// Source recorded when the caller names none
pub const MANUAL_SOURCE: &str = "manual";

fn default_source() -> String {
    MANUAL_SOURCE.to_owned()
}

/// Whether a workout is still ahead or already done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    /// Scheduled, not yet done
    Planned,
    /// Done; counted by the analytics summary
    #[default]
    Completed,
}

/// Optional measurements and intake shared by new workouts and updates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    /// Duration (minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_rpe: Option<f64>,
    /// Average heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate_bpm: Option<f64>,
    /// Maximum heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heart_rate_bpm: Option<f64>,
    /// Average power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_power_watts: Option<f64>,
    /// Normalized power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_power_watts: Option<f64>,
    /// Average cadence (rpm or spm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cadence: Option<f64>,
    /// Distance (km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Elevation gain (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    /// Training stress score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tss: Option<f64>,
    /// Carbohydrate actually taken (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_carbs_g: Option<f64>,
    /// Fluid actually taken (ml)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_fluids_ml: Option<f64>,
    /// Sodium actually taken (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_sodium_mg: Option<f64>,
    /// Air temperature (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Relative humidity (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn overlay<T: Clone>(target: &mut Option<T>, value: Option<&T>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}

impl WorkoutMetrics {
    /// Replace every field that `update` sets; absent fields keep their value
    pub fn overlay(&mut self, update: &Self) {
        overlay(&mut self.duration_minutes, update.duration_minutes.as_ref());
        overlay(&mut self.intensity_rpe, update.intensity_rpe.as_ref());
        overlay(&mut self.avg_heart_rate_bpm, update.avg_heart_rate_bpm.as_ref());
        overlay(&mut self.max_heart_rate_bpm, update.max_heart_rate_bpm.as_ref());
        overlay(&mut self.avg_power_watts, update.avg_power_watts.as_ref());
        overlay(
            &mut self.normalized_power_watts,
            update.normalized_power_watts.as_ref(),
        );
        overlay(&mut self.avg_cadence, update.avg_cadence.as_ref());
        overlay(&mut self.distance_km, update.distance_km.as_ref());
        overlay(&mut self.elevation_gain_m, update.elevation_gain_m.as_ref());
        overlay(&mut self.tss, update.tss.as_ref());
        overlay(&mut self.completed_carbs_g, update.completed_carbs_g.as_ref());
        overlay(
            &mut self.completed_fluids_ml,
            update.completed_fluids_ml.as_ref(),
        );
        overlay(
            &mut self.completed_sodium_mg,
            update.completed_sodium_mg.as_ref(),
        );
        overlay(&mut self.temperature_c, update.temperature_c.as_ref());
        overlay(&mut self.humidity_pct, update.humidity_pct.as_ref());
        overlay(&mut self.notes, update.notes.as_ref());
    }
}

/// A workout submitted by an athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Where the workout came from (`manual` unless stated)
    #[serde(default = "default_source")]
    pub source: String,
    /// Id at the source, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Sport
    pub sport: SportType,
    /// Planned or completed
    #[serde(default)]
    pub status: WorkoutStatus,
    /// Start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Measurements and intake
    #[serde(flatten)]
    pub metrics: WorkoutMetrics,
}

impl NewWorkout {
    /// Manual, completed workout with no measurements
    #[must_use]
    pub fn new(sport: SportType) -> Self {
        Self {
            source: default_source(),
            external_id: None,
            sport,
            status: WorkoutStatus::Completed,
            start_time: None,
            metrics: WorkoutMetrics::default(),
        }
    }
}

/// Partial update to a logged workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutUpdate {
    /// New status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkoutStatus>,
    /// New start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Measurements to replace
    #[serde(flatten)]
    pub metrics: WorkoutMetrics,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Store-assigned id
    pub id: u64,
    /// Where the workout came from
    pub source: String,
    /// Id at the source, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Sport
    pub sport: SportType,
    /// Planned or completed
    pub status: WorkoutStatus,
    /// Start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Measurements and intake
    #[serde(flatten)]
    pub metrics: WorkoutMetrics,
    /// When it was logged
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Workout built from a submission, trimming the text fields
    #[must_use]
    pub fn new(id: u64, workout: NewWorkout, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            source: workout.source.trim().to_owned(),
            external_id: workout.external_id.map(|external| external.trim().to_owned()),
            sport: workout.sport,
            status: workout.status,
            start_time: workout.start_time,
            metrics: workout.metrics,
            created_at,
        }
    }

    /// Start time, or the log time when unknown; used for ordering and chart days
    #[must_use]
    pub fn anchor_time(&self) -> DateTime<Utc> {
        self.start_time.unwrap_or(self.created_at)
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: &WorkoutUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        overlay(&mut self.start_time, update.start_time.as_ref());
        self.metrics.overlay(&update.metrics);
    }
}

/// A fueling event submitted for a workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFuelingEvent {
    /// Minutes after the workout start
    pub minute_offset: u32,
    /// Wall-clock time of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,
    /// What was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    /// Carbohydrate (g)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fluid (ml)
    #[serde(default)]
    pub fluid_ml: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium_mg: f64,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A fueling event recorded against a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingEvent {
    /// Store-assigned id
    pub id: u64,
    /// Workout the event belongs to
    pub workout_id: u64,
    /// Minutes after the workout start
    pub minute_offset: u32,
    /// Wall-clock time of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,
    /// What was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Fluid (ml)
    pub fluid_ml: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When it was recorded
    pub created_at: DateTime<Utc>,
}

/// Which workouts a listing returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutFilter {
    /// Maximum number of workouts
    pub limit: usize,
    /// Only this status
    pub status: Option<WorkoutStatus>,
    /// Only this source
    pub source: Option<String>,
}

/// Totals and averages over completed workouts; missing values count as zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Completed workouts in the window
    pub sessions: usize,
    /// Mean duration of workouts that report one (minutes)
    pub avg_duration_minutes: f64,
    /// Mean of reported average heart rates (bpm)
    pub avg_heart_rate_bpm: f64,
    /// Mean of reported average power (W)
    pub avg_power_watts: f64,
    /// Mean of reported RPE
    pub avg_rpe: f64,
    /// Distance covered (km)
    pub total_distance_km: f64,
    /// Carbohydrate taken (g)
    pub total_carbs_g: f64,
}

/// Per-day series for charting, one entry per day with a workout, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Calendar days (UTC)
    pub labels: Vec<NaiveDate>,
    /// Mean of reported average heart rates (bpm)
    pub avg_hr: Vec<f64>,
    /// Mean of reported average power (W)
    pub avg_power: Vec<f64>,
    /// Summed duration (minutes)
    pub total_minutes: Vec<f64>,
    /// Summed carbohydrate taken (g)
    pub carbs_g: Vec<f64>,
    /// Summed distance (km)
    pub distance_km: Vec<f64>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

#[derive(Debug, Default)]
struct DayTotals {
    heart_rate: Mean,
    power: Mean,
    minutes: f64,
    carbs_g: f64,
    distance_km: f64,
}

impl AnalyticsSummary {
    /// Summarize the completed workouts among `workouts`
    #[must_use]
    pub fn from_workouts<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> Self {
        let mut sessions = 0;
        let mut duration = Mean::default();
        let mut heart_rate = Mean::default();
        let mut power = Mean::default();
        let mut rpe = Mean::default();
        let mut distance = 0.0;
        let mut carbs = 0.0;

        for workout in workouts
            .into_iter()
            .filter(|w| w.status == WorkoutStatus::Completed)
        {
            let metrics = &workout.metrics;
            sessions += 1;
            duration.push(metrics.duration_minutes);
            heart_rate.push(metrics.avg_heart_rate_bpm);
            power.push(metrics.avg_power_watts);
            rpe.push(metrics.intensity_rpe);
            distance += metrics.distance_km.unwrap_or(0.0);
            carbs += metrics.completed_carbs_g.unwrap_or(0.0);
        }

        Self {
            sessions,
            avg_duration_minutes: duration.value(),
            avg_heart_rate_bpm: heart_rate.value(),
            avg_power_watts: power.value(),
            avg_rpe: rpe.value(),
            total_distance_km: distance,
            total_carbs_g: carbs,
        }
    }
}

impl ChartSeries {
    /// Group `workouts` by anchor day; every value rounded to 0.1
    #[must_use]
    pub fn from_workouts<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> Self {
        let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();
        for workout in workouts {
            let metrics = &workout.metrics;
            let day = days.entry(workout.anchor_time().date_naive()).or_default();
            day.heart_rate.push(metrics.avg_heart_rate_bpm);
            day.power.push(metrics.avg_power_watts);
            day.minutes += metrics.duration_minutes.unwrap_or(0.0);
            day.carbs_g += metrics.completed_carbs_g.unwrap_or(0.0);
            day.distance_km += metrics.distance_km.unwrap_or(0.0);
        }

        let mut series = Self::default();
        for (date, day) in days {
            series.labels.push(date);
            series.avg_hr.push(round_to(day.heart_rate.value(), 1));
            series.avg_power.push(round_to(day.power.value(), 1));
            series.total_minutes.push(round_to(day.minutes, 1));
            series.carbs_g.push(round_to(day.carbs_g, 1));
            series.distance_km.push(round_to(day.distance_km, 1));
        }
        series
    }
}

/// Log of an athlete's workouts and their fueling
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Log a workout for `athlete_id`
    ///
    /// # Errors
    ///
    /// Implementations may reject the workout; the in-memory store never does
    async fn add(&self, athlete_id: &str, workout: NewWorkout) -> AppResult<Workout>;

    /// One of the athlete's workouts
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for unknown ids or workouts logged by another athlete
    async fn get(&self, athlete_id: &str, workout_id: u64) -> AppResult<Workout>;

    /// Apply a partial update to one of the athlete's workouts
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for unknown ids or workouts logged by another athlete
    async fn update(
        &self,
        athlete_id: &str,
        workout_id: u64,
        update: &WorkoutUpdate,
    ) -> AppResult<Workout>;

    /// The athlete's workouts matching `filter`, latest start first
    async fn list(&self, athlete_id: &str, filter: &WorkoutFilter) -> Vec<Workout>;

    /// Record a fueling event against one of the athlete's workouts
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the workout is not the athlete's
    async fn add_event(
        &self,
        athlete_id: &str,
        workout_id: u64,
        event: NewFuelingEvent,
    ) -> AppResult<FuelingEvent>;

    /// Fueling events of one workout by minute offset
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the workout is not the athlete's
    async fn list_events(
        &self,
        athlete_id: &str,
        workout_id: u64,
    ) -> AppResult<Vec<FuelingEvent>>;

    /// Delete a fueling event
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the workout is not the athlete's or has no such event
    async fn delete_event(
        &self,
        athlete_id: &str,
        workout_id: u64,
        event_id: u64,
    ) -> AppResult<()>;

    /// Summary of completed workouts logged at or after `since`
    async fn summary(&self, athlete_id: &str, since: DateTime<Utc>) -> AnalyticsSummary;

    /// Per-day series of every workout logged at or after `since`
    async fn chart_series(&self, athlete_id: &str, since: DateTime<Utc>) -> ChartSeries;
}

struct LoggedWorkout {
    owner: String,
    workout: Workout,
    events: Vec<FuelingEvent>,
}

fn workout_not_found(workout_id: u64) -> AppError {
    AppError::not_found(format!("Workout {workout_id}"))
}

/// Workout log held in memory
pub struct InMemoryWorkoutStore {
    workouts: DashMap<u64, LoggedWorkout>,
    next_workout_id: AtomicU64,
    next_event_id: AtomicU64,
}

impl Default for InMemoryWorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWorkoutStore {
    /// Empty log
    #[must_use]
    pub fn new() -> Self {
        Self {
            workouts: DashMap::new(),
            next_workout_id: AtomicU64::new(1),
            next_event_id: AtomicU64::new(1),
        }
    }

    fn logged_since(&self, athlete_id: &str, since: DateTime<Utc>) -> Vec<Workout> {
        self.workouts
            .iter()
            .filter(|entry| entry.owner == athlete_id && entry.workout.created_at >= since)
            .map(|entry| entry.workout.clone())
            .collect()
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn add(&self, athlete_id: &str, workout: NewWorkout) -> AppResult<Workout> {
        let id = self.next_workout_id.fetch_add(1, Ordering::Relaxed);
        let workout = Workout::new(id, workout, Utc::now());
        self.workouts.insert(
            id,
            LoggedWorkout {
                owner: athlete_id.to_owned(),
                workout: workout.clone(),
                events: Vec::new(),
            },
        );
        debug!(athlete.id = %athlete_id, workout.id = id, sport = %workout.sport, "Workout logged");
        Ok(workout)
    }

    async fn get(&self, athlete_id: &str, workout_id: u64) -> AppResult<Workout> {
        self.workouts
            .get(&workout_id)
            .filter(|entry| entry.owner == athlete_id)
            .map(|entry| entry.workout.clone())
            .ok_or_else(|| workout_not_found(workout_id))
    }

    async fn update(
        &self,
        athlete_id: &str,
        workout_id: u64,
        update: &WorkoutUpdate,
    ) -> AppResult<Workout> {
        let mut entry = self
            .workouts
            .get_mut(&workout_id)
            .filter(|entry| entry.owner == athlete_id)
            .ok_or_else(|| workout_not_found(workout_id))?;
        entry.workout.apply(update);
        debug!(athlete.id = %athlete_id, workout.id = workout_id, "Workout updated");
        Ok(entry.workout.clone())
    }

    async fn list(&self, athlete_id: &str, filter: &WorkoutFilter) -> Vec<Workout> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|entry| entry.owner == athlete_id)
            .filter(|entry| filter.status.is_none_or(|s| entry.workout.status == s))
            .filter(|entry| {
                filter
                    .source
                    .as_deref()
                    .is_none_or(|s| entry.workout.source == s)
            })
            .map(|entry| entry.workout.clone())
            .collect();
        workouts.sort_by(|a, b| {
            b.anchor_time()
                .cmp(&a.anchor_time())
                .then(b.id.cmp(&a.id))
        });
        workouts.truncate(filter.limit);
        workouts
    }

    async fn add_event(
        &self,
        athlete_id: &str,
        workout_id: u64,
        event: NewFuelingEvent,
    ) -> AppResult<FuelingEvent> {
        let mut entry = self
            .workouts
            .get_mut(&workout_id)
            .filter(|entry| entry.owner == athlete_id)
            .ok_or_else(|| workout_not_found(workout_id))?;
        let id = self.next_event_id.fetch_add(1, Ordering::Relaxed);
        let event = FuelingEvent {
            id,
            workout_id,
            minute_offset: event.minute_offset,
            event_time: event.event_time,
            food_name: event.food_name.map(|name| name.trim().to_owned()),
            carbs_g: event.carbs_g,
            fluid_ml: event.fluid_ml,
            sodium_mg: event.sodium_mg,
            notes: event.notes,
            created_at: Utc::now(),
        };
        entry.events.push(event.clone());
        debug!(
            athlete.id = %athlete_id,
            workout.id = workout_id,
            event.id = id,
            "Fueling event recorded"
        );
        Ok(event)
    }

    async fn list_events(
        &self,
        athlete_id: &str,
        workout_id: u64,
    ) -> AppResult<Vec<FuelingEvent>> {
        let mut events = self
            .workouts
            .get(&workout_id)
            .filter(|entry| entry.owner == athlete_id)
            .map(|entry| entry.events.clone())
            .ok_or_else(|| workout_not_found(workout_id))?;
        events.sort_by_key(|e| (e.minute_offset, e.id));
        Ok(events)
    }

    async fn delete_event(
        &self,
        athlete_id: &str,
        workout_id: u64,
        event_id: u64,
    ) -> AppResult<()> {
        let mut entry = self
            .workouts
            .get_mut(&workout_id)
            .filter(|entry| entry.owner == athlete_id)
            .ok_or_else(|| workout_not_found(workout_id))?;
        let before = entry.events.len();
        entry.events.retain(|e| e.id != event_id);
        if entry.events.len() == before {
            return Err(AppError::not_found(format!("Fueling event {event_id}")));
        }
        Ok(())
    }

    async fn summary(&self, athlete_id: &str, since: DateTime<Utc>) -> AnalyticsSummary {
        AnalyticsSummary::from_workouts(&self.logged_since(athlete_id, since))
    }

    async fn chart_series(&self, athlete_id: &str, since: DateTime<Utc>) -> ChartSeries {
        ChartSeries::from_workouts(&self.logged_since(athlete_id, since))
    }
}
