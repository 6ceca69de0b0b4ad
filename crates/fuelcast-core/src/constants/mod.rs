// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation ranges, service names, ports, and boundary defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Engine tuning constants do not live here; they belong to `FuelingConfig` in the
//! intelligence crate so they can be overridden and validated together.

/// Validation limits enforced at the request boundary
pub mod limits;

/// Service names for structured logging
pub mod service_names {
    /// Fuelcast HTTP server
    pub const FUELCAST_SERVER: &str = "fuelcast-server";
    /// Fuelcast command-line tool
    pub const FUELCAST_CLI: &str = "fuelcast-cli";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
}

/// Boundary defaults
pub mod defaults {
    /// Default host to bind
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default number of audit entries retained in memory
    pub const AUDIT_CAPACITY: usize = 500;
    /// Default number of audit entries returned by a listing
    pub const AUDIT_LIST_LIMIT: usize = 20;
    /// Maximum number of audit entries returned by a listing
    pub const AUDIT_LIST_MAX: usize = 200;
    /// Identity used when a caller does not name an athlete
    pub const ANONYMOUS_ATHLETE: &str = "anonymous";
    /// Header carrying the caller's athlete identity
    pub const ATHLETE_ID_HEADER: &str = "x-athlete-id";
    /// Default number of workouts returned by a listing
    pub const WORKOUT_LIST_LIMIT: usize = 100;
    /// Maximum number of workouts returned by a listing
    pub const WORKOUT_LIST_MAX: usize = 500;
    /// Default analytics window (days)
    pub const ANALYTICS_DAYS: u32 = 30;
    /// Shortest analytics window (days)
    pub const ANALYTICS_DAYS_MIN: u32 = 7;
    /// Longest analytics window (days)
    pub const ANALYTICS_DAYS_MAX: u32 = 365;
}
