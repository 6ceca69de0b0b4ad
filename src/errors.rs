// ABOUTME: Error module re-exports from fuelcast-core
// ABOUTME: Keeps crate::errors paths stable for routes, services, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` carries an `ErrorCode` that maps onto an HTTP status. With the
//! `http-response` feature enabled on `fuelcast-core`, handlers can return
//! `Result<_, AppError>` directly.

pub use fuelcast_core::errors::*;
