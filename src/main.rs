// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ovn_interconnect::config::Config;
use ovn_interconnect::constants::{APP_NAME, OVN_INTERCONNECT_CONFIGMAP_NAME, OVN_NAMESPACE};
use ovn_interconnect::find_interconnect_config_map;
use ovn_interconnect::kubernetes::create_client;
use ovn_interconnect::output::render;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the rendered ConfigMap
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {}", APP_NAME);

    let config = Config::from_env()?;
    info!("Configuration loaded: output_format={:?}", config.output_format);

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let config_map = find_interconnect_config_map(&client)
        .await
        .with_context(|| {
            format!(
                "Failed to get ConfigMap {}/{}",
                OVN_NAMESPACE, OVN_INTERCONNECT_CONFIGMAP_NAME
            )
        })?;

    match config_map {
        Some(cm) => println!("{}", render(&cm, config.output_format)?),
        None => info!(
            "ConfigMap {}/{} not found, interconnect is not configured",
            OVN_NAMESPACE, OVN_INTERCONNECT_CONFIGMAP_NAME
        ),
    }

    Ok(())
}
