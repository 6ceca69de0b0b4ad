// ABOUTME: HTTP server binary exposing fueling predictions, simulations, foods, and profiles
// ABOUTME: Loads ServerConfig from the environment, initializes logging, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fuelcast Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use fuelcast::{config::ServerConfig, logging, resources::ServerResources, routes};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fuelcast-server")]
#[command(about = "Fuelcast - endurance fueling predictions over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting Fuelcast server");
    info!("{}", config.summary());

    let resources = ServerResources::in_memory(&config);
    let app = routes::router(resources);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}
