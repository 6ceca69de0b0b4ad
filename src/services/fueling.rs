// ABOUTME: Fueling service composing profile store, validation, food catalog, engine, and audit
// ABOUTME: Protocol-agnostic entry point shared by the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::task;
use tracing::warn;
use uuid::Uuid;

use crate::audit::{AuditEntry, AuditKind, AuditSink};
use crate::catalog::{FoodCatalog, FoodScope, NewFoodItem};
use crate::constants::defaults::{AUDIT_LIST_LIMIT, AUDIT_LIST_MAX};
use crate::errors::{AppError, AppResult};
use crate::intelligence::simulation;
use crate::intelligence::FuelingEngine;
use crate::logging::AppLogger;
use crate::models::{
    AthleteProfile, EnvironmentContext, FoodItem, PredictionRequest, PredictionResponse,
    SessionContext, SimulationRequest, SimulationResponse,
};
use crate::profiles::{ProfileStore, ProfileUpdate, StoredProfile};
use crate::validation;

use super::rejected;

const fn default_science_mode() -> bool {
    true
}

/// Prediction request as received at the boundary
///
/// Profile and environment may be omitted; they are completed from the
/// athlete's stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDraft {
    /// Athlete profile; stored profile when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<AthleteProfile>,
    /// Session
    pub session: SessionContext,
    /// Conditions; stored default conditions when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentContext>,
    /// Science mode
    #[serde(default = "default_science_mode")]
    pub science_mode: bool,
    /// Selected catalog foods
    #[serde(default)]
    pub selected_food_ids: Vec<u64>,
}

impl From<PredictionRequest> for PredictionDraft {
    fn from(request: PredictionRequest) -> Self {
        Self {
            profile: Some(request.profile),
            session: request.session,
            environment: Some(request.environment),
            science_mode: request.science_mode,
            selected_food_ids: request.selected_food_ids,
        }
    }
}

impl PredictionDraft {
    /// Fill missing parts from a stored profile
    ///
    /// The stored indoor default only applies together with the stored conditions.
    #[must_use]
    pub fn complete(self, stored: &StoredProfile) -> PredictionRequest {
        let mut session = self.session;
        let environment = self.environment.unwrap_or_else(|| {
            session.indoor = session.indoor || stored.default_indoor;
            stored.default_environment
        });
        PredictionRequest {
            profile: self.profile.unwrap_or_else(|| stored.profile.clone()),
            session,
            environment,
            science_mode: self.science_mode,
            selected_food_ids: self.selected_food_ids,
        }
    }
}

/// Simulation request as received at the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDraft {
    /// Baseline request
    pub base_request: PredictionDraft,
    /// Temperature increase (°C)
    #[serde(default)]
    pub hotter_by_c: f64,
    /// Duration increase (minutes)
    #[serde(default)]
    pub longer_by_minutes: i32,
    /// Perceived exertion change
    #[serde(default)]
    pub intensity_delta_rpe: f64,
}

impl SimulationDraft {
    /// Fill the baseline request from a stored profile
    #[must_use]
    pub fn complete(self, stored: &StoredProfile) -> SimulationRequest {
        SimulationRequest {
            base_request: self.base_request.complete(stored),
            hotter_by_c: self.hotter_by_c,
            longer_by_minutes: self.longer_by_minutes,
            intensity_delta_rpe: self.intensity_delta_rpe,
        }
    }
}

/// Fueling operations for one athlete identity
#[derive(Clone)]
pub struct FuelingService {
    engine: Arc<FuelingEngine>,
    catalog: Arc<dyn FoodCatalog>,
    profiles: Arc<dyn ProfileStore>,
    audit: Arc<dyn AuditSink>,
}

impl FuelingService {
    /// Compose the service from its collaborators
    #[must_use]
    pub fn new(
        engine: Arc<FuelingEngine>,
        catalog: Arc<dyn FoodCatalog>,
        profiles: Arc<dyn ProfileStore>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            engine,
            catalog,
            profiles,
            audit,
        }
    }

    /// Complete, validate, and predict; the result is audited
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first out-of-range field
    pub async fn predict(
        &self,
        athlete_id: &str,
        draft: PredictionDraft,
    ) -> AppResult<PredictionResponse> {
        let stored = self.profiles.get(athlete_id).await;
        let request = draft.complete(&stored);
        validation::validate_request(&request).map_err(|e| rejected(athlete_id, e))?;

        let foods = self
            .catalog
            .resolve_for_plan(athlete_id, &request.selected_food_ids)
            .await;
        let response = self.engine.predict(&request, &foods);

        self.record(
            athlete_id,
            AuditKind::Prediction,
            response.recommendation_id,
            serde_json::to_value(&request)?,
            serde_json::to_value(&response)?,
        )
        .await;

        AppLogger::log_prediction(
            athlete_id,
            response.recommendation_id,
            response.balanced().map_or(0.0, |b| b.carbs_g_per_hour),
        );
        Ok(response)
    }

    /// Complete, validate, and simulate; audited under the simulated recommendation id
    ///
    /// # Errors
    ///
    /// Returns a validation error if the baseline or the perturbed request is out of range
    pub async fn simulate(
        &self,
        athlete_id: &str,
        draft: SimulationDraft,
    ) -> AppResult<SimulationResponse> {
        let stored = self.profiles.get(athlete_id).await;
        let request = draft.complete(&stored);
        let perturbed = simulation::perturb(&request, self.engine.config().intensity.effort_bounds);
        validation::validate_simulation(&request, &perturbed)
            .map_err(|e| rejected(athlete_id, e))?;

        let foods = self
            .catalog
            .resolve_for_plan(athlete_id, &request.base_request.selected_food_ids)
            .await;
        let engine = Arc::clone(&self.engine);
        let job = request.clone();
        let response = task::spawn_blocking(move || engine.simulate(&job, &foods))
            .await
            .map_err(|e| AppError::internal(format!("Simulation task failed: {e}")))?;

        self.record(
            athlete_id,
            AuditKind::Simulation,
            response.simulated.recommendation_id,
            serde_json::to_value(&request)?,
            serde_json::to_value(&response)?,
        )
        .await;

        AppLogger::log_simulation(
            athlete_id,
            response.simulated.recommendation_id,
            response.delta.carbs_g_per_hour,
        );
        Ok(response)
    }

    async fn record(
        &self,
        athlete_id: &str,
        kind: AuditKind,
        recommendation_id: Uuid,
        request: Value,
        response: Value,
    ) {
        let entry = AuditEntry::now(recommendation_id, athlete_id, kind, request, response);
        if let Err(e) = self.audit.record(entry).await {
            warn!(athlete.id = %athlete_id, error = %e, "Failed to record audit entry");
        }
    }

    /// Most recent audit entries, newest first
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `limit` is outside `1..=200`
    pub async fn recent_audit(
        &self,
        athlete_id: &str,
        limit: Option<usize>,
    ) -> AppResult<Vec<AuditEntry>> {
        let limit = limit.unwrap_or(AUDIT_LIST_LIMIT);
        if !(1..=AUDIT_LIST_MAX).contains(&limit) {
            return Err(AppError::value_out_of_range(
                "limit",
                limit as f64,
                1.0,
                AUDIT_LIST_MAX as f64,
            ));
        }
        Ok(self.audit.recent(athlete_id, limit).await)
    }

    /// Foods visible to the athlete
    pub async fn list_foods(&self, athlete_id: &str, scope: FoodScope) -> Vec<FoodItem> {
        self.catalog.list(athlete_id, scope).await
    }

    /// Validate and add a custom food
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range nutrients or bad text lengths
    pub async fn add_food(&self, athlete_id: &str, food: NewFoodItem) -> AppResult<FoodItem> {
        validation::validate_food(&food).map_err(|e| rejected(athlete_id, e))?;
        self.catalog.add_custom(athlete_id, food).await
    }

    /// Delete one of the athlete's custom foods
    ///
    /// # Errors
    ///
    /// Built-in foods cannot be deleted; unknown ids are not found
    pub async fn delete_food(&self, athlete_id: &str, food_id: u64) -> AppResult<()> {
        self.catalog.delete_custom(athlete_id, food_id).await
    }

    /// Stored or default profile
    pub async fn profile(&self, athlete_id: &str) -> StoredProfile {
        self.profiles.get(athlete_id).await
    }

    /// Merge, validate, and persist a profile update
    ///
    /// # Errors
    ///
    /// Returns a validation error when the merged profile or default conditions are out of range
    pub async fn update_profile(
        &self,
        athlete_id: &str,
        update: &ProfileUpdate,
    ) -> AppResult<StoredProfile> {
        self.profiles
            .upsert(athlete_id, update, validation::validate_stored_profile)
            .await
            .map_err(|e| rejected(athlete_id, e))
    }
}
