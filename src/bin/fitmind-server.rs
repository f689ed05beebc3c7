// ABOUTME: HTTP server binary for the FitMind coaching API
// ABOUTME: Loads environment configuration, wires services and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # `FitMind` Server Binary
//!
//! Serves plan generation, image generation, text-to-speech and PDF export.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fitmind::{
    config::ServerConfig, constants::service_names, logging, resources::ServerResources, routes,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitmind-server")]
#[command(about = "FitMind - AI fitness coaching API with template fallback")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
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

    info!(service = service_names::FITMIND_SERVER, "Starting FitMind API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config.clone()));
    info!(
        sources = ?resources.orchestrator.source_names(),
        "Plan generation chain ready"
    );

    let app = routes::router(&resources);
    let address = format!("{}:{}", config.host, config.http_port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    display_available_endpoints(&config);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

/// Log every endpoint with its full URL
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;
    info!("=== Available API Endpoints ===");
    info!("   Generate Plan:   POST http://{host}:{port}/api/generate-plan");
    info!("   Generate Image:  POST http://{host}:{port}/api/generate-image");
    info!("   Text to Speech:  POST http://{host}:{port}/api/text-to-speech");
    info!("   Export PDF:      POST http://{host}:{port}/api/export-pdf");
    info!("   Health:          GET  http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
