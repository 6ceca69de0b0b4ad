// ABOUTME: Constants module re-exports from fuelcast-core
// ABOUTME: Validation limits, service names, ports, endpoints, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fuelcast_core::constants::*;
