// ABOUTME: Fuelcast CLI - offline fueling predictions and what-if simulations from JSON files
// ABOUTME: Reads a request file, validates it, runs the engine, and prints the JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fuelcast CLI
//!
//! Usage:
//! ```bash
//! # Predict from a request file, using the built-in food catalog
//! fuelcast-cli predict --request ride.json
//!
//! # Predict with a custom food list
//! fuelcast-cli predict --request ride.json --foods my_foods.json
//!
//! # What if it is 6 °C hotter and 30 minutes longer?
//! fuelcast-cli simulate --request ride.json --hotter-by 6 --longer-by 30
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fuelcast::cli::{self, Perturbation};
use fuelcast::intelligence::FuelingEngine;
use fuelcast::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "fuelcast-cli",
    about = "Fuelcast fueling CLI",
    long_about = "Offline carbohydrate, fluid, and sodium predictions and what-if simulations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Predict fueling strategies and a schedule for one session
    Predict {
        /// Request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Food list JSON file (defaults to the built-in catalog)
        #[arg(long)]
        foods: Option<PathBuf>,
    },
    /// Compare a baseline session with a perturbed one
    Simulate {
        /// Baseline request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Food list JSON file (defaults to the built-in catalog)
        #[arg(long)]
        foods: Option<PathBuf>,

        /// Temperature increase (°C)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hotter_by: f64,

        /// Duration increase (minutes)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        longer_by: i32,

        /// Perceived exertion change
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        intensity_delta: f64,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    LoggingConfig::for_cli().init()?;

    let engine = FuelingEngine::new();
    let output = match args.command {
        Command::Predict { request, foods } => {
            let response = cli::predict_file(&engine, &request, foods.as_deref())?;
            cli::render(&response, args.compact)?
        }
        Command::Simulate {
            request,
            foods,
            hotter_by,
            longer_by,
            intensity_delta,
        } => {
            let perturbation = Perturbation {
                hotter_by_c: hotter_by,
                longer_by_minutes: longer_by,
                intensity_delta_rpe: intensity_delta,
            };
            let response = cli::simulate_file(&engine, &request, foods.as_deref(), perturbation)?;
            cli::render(&response, args.compact)?
        }
    };

    println!("{output}");
    Ok(())
}
