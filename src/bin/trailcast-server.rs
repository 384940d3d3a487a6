// ABOUTME: Server binary for the Trailcast travel planning API
// ABOUTME: Loads configuration, initializes logging, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! # Trailcast Server Binary
//!
//! Starts the REST API for city search, weather, and activity recommendations.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use trailcast::{config::environment::ServerConfig, logging, server::TrailcastServer};

#[derive(Parser)]
#[command(name = "trailcast-server")]
#[command(about = "Trailcast - travel planning API with weather-based activity recommendations")]
#[command(version)]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
        config.validate()?;
    }

    info!("{}", config.summary());

    let server = TrailcastServer::from_config(Arc::new(config));
    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    info!("Trailcast stopped");
    Ok(())
}
