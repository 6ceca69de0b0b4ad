// ABOUTME: Main library entry point for the fuelcast fueling service
// ABOUTME: Boundary around the fueling engine: config, logging, validation, collaborators, HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelcast
//!
//! Per-hour carbohydrate, fluid, and sodium targets for endurance sessions,
//! a minute-by-minute fueling schedule, and "what-if" simulation.
//!
//! ## Architecture
//!
//! - **Engine** (`fuelcast-intelligence`): pure, deterministic prediction pipeline
//! - **Collaborators**: food catalog, profile store, audit sink, and workout log
//!   traits with in-memory implementations
//! - **Service**: validates requests and composes the collaborators with the engine
//! - **Routes**: axum HTTP surface over the service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fuelcast::config::ServerConfig;
//! use fuelcast::resources::ServerResources;
//! use fuelcast::routes;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let resources = ServerResources::in_memory(&config);
//! let _app = routes::router(resources);
//! # Ok(())
//! # }
//! ```

/// Unified error handling (re-exported from `fuelcast-core`)
pub mod errors;

/// Application constants (re-exported from `fuelcast-core`)
pub mod constants;

/// Request/response value types (re-exported from `fuelcast-core`)
pub mod models;

/// Fueling engine (re-exported from `fuelcast-intelligence`)
pub mod intelligence;

/// Environment-driven server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Boundary validation of requests and custom foods
pub mod validation;

/// Food catalog collaborator
pub mod catalog;

/// Athlete profile store collaborator
pub mod profiles;

/// Audit sink collaborator
pub mod audit;

/// Workout log collaborator and analytics
pub mod workouts;

/// Services composing collaborators with the engine
pub mod services;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Offline helpers behind the command-line tool
pub mod cli;
