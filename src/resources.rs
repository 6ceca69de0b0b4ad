// ABOUTME: Centralized resource container shared by the HTTP routes
// ABOUTME: Holds the engine and the catalog, profile, audit, and workout collaborators behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and handed to every router as axum state.

use std::sync::Arc;

use crate::audit::{AuditSink, InMemoryAuditLog};
use crate::catalog::{FoodCatalog, InMemoryFoodCatalog};
use crate::config::ServerConfig;
use crate::intelligence::FuelingEngine;
use crate::profiles::{InMemoryProfileStore, ProfileStore};
use crate::services::{FuelingService, WorkoutService};
use crate::workouts::{InMemoryWorkoutStore, WorkoutStore};

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Fueling engine
    pub engine: Arc<FuelingEngine>,
    /// Food catalog
    pub catalog: Arc<dyn FoodCatalog>,
    /// Profile store
    pub profiles: Arc<dyn ProfileStore>,
    /// Audit sink
    pub audit: Arc<dyn AuditSink>,
    /// Workout log
    pub workouts: Arc<dyn WorkoutStore>,
}

impl ServerResources {
    /// Assemble resources from explicit collaborators
    #[must_use]
    pub fn new(
        config: ServerConfig,
        engine: FuelingEngine,
        catalog: Arc<dyn FoodCatalog>,
        profiles: Arc<dyn ProfileStore>,
        audit: Arc<dyn AuditSink>,
        workouts: Arc<dyn WorkoutStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            catalog,
            profiles,
            audit,
            workouts,
        }
    }

    /// Resources backed by the in-memory collaborators and the global engine configuration
    #[must_use]
    pub fn in_memory(config: &ServerConfig) -> Arc<Self> {
        Arc::new(Self::new(
            config.clone(),
            FuelingEngine::new(),
            Arc::new(InMemoryFoodCatalog::new()),
            Arc::new(InMemoryProfileStore::new()),
            Arc::new(InMemoryAuditLog::new(config.audit_capacity)),
            Arc::new(InMemoryWorkoutStore::new()),
        ))
    }

    /// Fueling service over these resources
    #[must_use]
    pub fn fueling(&self) -> FuelingService {
        FuelingService::new(
            Arc::clone(&self.engine),
            Arc::clone(&self.catalog),
            Arc::clone(&self.profiles),
            Arc::clone(&self.audit),
        )
    }

    /// Workout service over these resources
    #[must_use]
    pub fn workout_log(&self) -> WorkoutService {
        WorkoutService::new(Arc::clone(&self.workouts))
    }
}
