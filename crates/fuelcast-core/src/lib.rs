// ABOUTME: Core types and constants for the fuelcast endurance fueling platform
// ABOUTME: Foundation crate with error handling, athlete/session models, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelcast Core
//!
//! Foundation crate providing shared types and constants for the fuelcast
//! fueling engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Validation limits and service-wide constants organized by domain
//! - **models**: Athlete profile, session, environment, food, and prediction value types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and validation limits organized by domain
pub mod constants;

/// Core data models (profile, session, environment, foods, predictions)
pub mod models;
