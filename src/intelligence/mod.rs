// ABOUTME: Intelligence module re-exports from fuelcast-intelligence crate
// ABOUTME: Exposes the fueling engine and its configuration under crate::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The fueling engine lives in the `fuelcast-intelligence` crate; this module
//! re-exports it so the boundary code imports from one place.

pub use fuelcast_intelligence::*;

pub use fuelcast_intelligence::{
    carbohydrate, confidence, config, engine, gi_risk, hydration, intensity, load_factors,
    numeric, scheduler, simulation, strategy,
};
