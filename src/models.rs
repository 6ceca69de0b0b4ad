// ABOUTME: Data model re-exports from fuelcast-core
// ABOUTME: Athlete, session, environment, food, prediction, and simulation value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every entity is a value object built per request and discarded after the
//! response; nothing here is persisted by the engine.

pub use fuelcast_core::models::*;
