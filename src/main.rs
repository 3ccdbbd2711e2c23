// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nginx_operator::config::Config;
use nginx_operator::kubernetes::wait_for_nginx_crd;
use nginx_operator::reconcilers::NginxController;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Nginx operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, resync_period={:?}",
        config.watch_namespace.as_deref().unwrap_or("<all>"),
        config.resync_period
    );

    // Create Kubernetes client
    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;
    info!("Connected to Kubernetes cluster");

    info!("Waiting for Nginx CRD to become available...");
    wait_for_nginx_crd(&client).await?;

    let controller = NginxController::new(client, config);

    info!("Starting controller...");
    controller.run().await?;

    // The controller stream only ends on shutdown
    warn!("Controller stopped");
    Ok(())
}
