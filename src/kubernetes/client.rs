// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{OvnError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the configured kubeconfig, or infer one
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig_path {
        Some(path) => {
            let kubeconfig = read_kubeconfig(path).await?;
            create_client_from_kubeconfig(&kubeconfig, config.kube_context.as_deref()).await
        }
        None => create_inferred_client(config.kube_context.as_deref()).await,
    }
}

/// Use in-cluster config or $KUBECONFIG, optionally pinned to a context
async fn create_inferred_client(context: Option<&str>) -> Result<Client> {
    let client_config = match context {
        Some(context) => {
            debug!("Inferring kubeconfig with context {}", context);
            KConfig::from_kubeconfig(&options_for(Some(context)))
                .await
                .map_err(|e| {
                    OvnError::KubeconfigError(format!(
                        "Failed to load context {}: {}",
                        context, e
                    ))
                })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| OvnError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    info!("Using cluster {}", client_config.cluster_url);
    Client::try_from(client_config)
        .map_err(|e| OvnError::KubeconfigError(format!("Failed to create client: {}", e)))
}

async fn read_kubeconfig(path: &Path) -> Result<String> {
    info!("Reading kubeconfig from {}", path.display());
    tokio::fs::read_to_string(path).await.map_err(|e| {
        OvnError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<Client> {
    let client_config = config_from_kubeconfig(kubeconfig, context).await?;
    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| OvnError::KubeconfigError(format!("Failed to create client: {}", e)))
}

async fn config_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| OvnError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &options_for(context))
        .await
        .map_err(|e| OvnError::KubeconfigError(format!("Failed to create config: {}", e)))
}

fn options_for(context: Option<&str>) -> KubeConfigOptions {
    KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    }
}
