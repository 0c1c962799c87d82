// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::OvnError;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// How the interconnect ConfigMap is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = OvnError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(OvnError::InvalidConfig(format!(
                "unknown output format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit kubeconfig file; falls back to in-cluster or $KUBECONFIG when unset
    pub kubeconfig_path: Option<PathBuf>,
    pub kube_context: Option<String>,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output_format = match non_empty("OUTPUT_FORMAT") {
            Some(v) => v.parse::<OutputFormat>().context("OUTPUT_FORMAT is invalid")?,
            None => OutputFormat::default(),
        };

        Ok(Config {
            kubeconfig_path: non_empty("KUBECONFIG_PATH").map(PathBuf::from),
            kube_context: non_empty("KUBE_CONTEXT"),
            output_format,
        })
    }
}
