// ABOUTME: Fueling intelligence crate: the prediction and simulation pipeline
// ABOUTME: Intensity normalization, load factors, carb/fluid/sodium models, strategies, schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelcast Intelligence
//!
//! A deterministic, side-effect-free pipeline that turns an athlete profile,
//! a session, and its environment into three risk-bounded fueling strategies,
//! a confidence band, and a minute-by-minute fueling schedule.
//!
//! ```text
//! request -> intensity -> load_factors -> carbohydrate -> {hydration, gi_risk}
//!         -> strategy (x3) -> confidence -> scheduler -> response
//! ```
//!
//! Every stage clamps its output, so any request inside the validated ranges
//! produces finite, in-range numbers. Nothing here performs I/O or keeps state
//! between calls; concurrent callers need no coordination.

/// Engine configuration (tunable constants, validation, env overrides)
pub mod config;

/// Numeric helpers shared by every stage
pub mod numeric;

/// Maps heart-rate, power, pace, or RPE intensity onto one effort scale
pub mod intensity;

/// Environment and telemetry load factors with rationale notes
pub mod load_factors;

/// Base carbohydrate rate with guardrails and gut capacity
pub mod carbohydrate;

/// Fluid and sodium per-hour targets
pub mod hydration;

/// GI distress risk heuristic
pub mod gi_risk;

/// Confidence band from input completeness
pub mod confidence;

/// Conservative / balanced / aggressive recommendations
pub mod strategy;

/// Time-sliced fueling schedule with food matching
pub mod scheduler;

/// What-if comparison between two pipeline passes
pub mod simulation;

/// The composed pipeline (`predict`, `simulate`)
pub mod engine;

pub use config::{ConfigError, FuelingConfig};
pub use engine::FuelingEngine;
