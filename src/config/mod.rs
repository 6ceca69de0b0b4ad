// ABOUTME: Configuration module for the fuelcast server and CLI
// ABOUTME: Environment-driven server settings; engine tuning lives in fuelcast-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! Environment-only configuration: every setting has a default and can be
//! overridden by an environment variable. Engine constants are configured
//! separately through `FuelingConfig` (`FUELING_*` variables).

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
