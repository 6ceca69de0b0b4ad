// ABOUTME: Command-line helpers: read JSON request files, validate, run the engine, render output
// ABOUTME: Backs the fuelcast-cli binary; no server, store, or audit involved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Offline prediction and simulation.
//!
//! Request files hold a [`PredictionDraft`]; a missing profile or environment
//! is completed from the default profile. Without a foods file the built-in
//! catalog supplies the schedule foods.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{builtin_foods, preferred_fallback};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::simulation;
use crate::intelligence::FuelingEngine;
use crate::models::{FoodItem, PredictionResponse, SimulationResponse};
use crate::profiles::StoredProfile;
use crate::services::{PredictionDraft, SimulationDraft};
use crate::validation;

/// What-if perturbations given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Perturbation {
    /// Temperature increase (°C)
    pub hotter_by_c: f64,
    /// Duration increase (minutes)
    pub longer_by_minutes: i32,
    /// Perceived exertion change
    pub intensity_delta_rpe: f64,
}

/// Read and deserialize a JSON file
///
/// # Errors
///
/// `InvalidInput` when the file cannot be read, `InvalidFormat` when it is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid JSON in {}: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Foods for the schedule: an explicit list, else the selected built-in ids, else the fallback
#[must_use]
pub fn schedule_foods(selected_ids: &[u64], explicit: Option<Vec<FoodItem>>) -> Vec<FoodItem> {
    if let Some(foods) = explicit {
        return foods;
    }
    let builtin = builtin_foods();
    let selected: Vec<FoodItem> = builtin
        .iter()
        .filter(|f| selected_ids.contains(&f.id))
        .cloned()
        .collect();
    if selected.is_empty() {
        preferred_fallback(&builtin)
    } else {
        selected
    }
}

fn load_foods(foods_path: Option<&Path>) -> AppResult<Option<Vec<FoodItem>>> {
    foods_path.map(read_json::<Vec<FoodItem>>).transpose()
}

/// Predict from a request file
///
/// # Errors
///
/// Returns file, JSON, or validation errors
pub fn predict_file(
    engine: &FuelingEngine,
    request_path: &Path,
    foods_path: Option<&Path>,
) -> AppResult<PredictionResponse> {
    let draft: PredictionDraft = read_json(request_path)?;
    let request = draft.complete(&StoredProfile::default());
    validation::validate_request(&request)?;
    let foods = schedule_foods(&request.selected_food_ids, load_foods(foods_path)?);
    Ok(engine.predict(&request, &foods))
}

/// Simulate from a baseline request file and command-line perturbations
///
/// # Errors
///
/// Returns file, JSON, or validation errors, including for the perturbed request
pub fn simulate_file(
    engine: &FuelingEngine,
    request_path: &Path,
    foods_path: Option<&Path>,
    perturbation: Perturbation,
) -> AppResult<SimulationResponse> {
    let base_request: PredictionDraft = read_json(request_path)?;
    let request = SimulationDraft {
        base_request,
        hotter_by_c: perturbation.hotter_by_c,
        longer_by_minutes: perturbation.longer_by_minutes,
        intensity_delta_rpe: perturbation.intensity_delta_rpe,
    }
    .complete(&StoredProfile::default());
    let perturbed = simulation::perturb(&request, engine.config().intensity.effort_bounds);
    validation::validate_simulation(&request, &perturbed)?;
    let foods = schedule_foods(
        &request.base_request.selected_food_ids,
        load_foods(foods_path)?,
    );
    Ok(engine.simulate(&request, &foods))
}

/// Render a response as JSON
///
/// # Errors
///
/// Returns a serialization error if the value cannot be encoded
pub fn render<T: Serialize>(value: &T, compact: bool) -> AppResult<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
