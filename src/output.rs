// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the interconnect ConfigMap for the command line.

use crate::config::OutputFormat;
use crate::error::{OvnError, Result};
use k8s_openapi::api::core::v1::ConfigMap;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, PartialEq)]
struct ConfigMapView<'a> {
    namespace: &'a str,
    name: &'a str,
    data: &'a BTreeMap<String, String>,
}

/// Render the ConfigMap's identity and data. Values are printed as stored.
pub fn render(cm: &ConfigMap, format: OutputFormat) -> Result<String> {
    let empty = BTreeMap::new();
    let view = ConfigMapView {
        namespace: cm.metadata.namespace.as_deref().unwrap_or_default(),
        name: cm.metadata.name.as_deref().unwrap_or_default(),
        data: cm.data.as_ref().unwrap_or(&empty),
    };

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&view)
            .map_err(|e| OvnError::OutputError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&view).map_err(|e| OvnError::OutputError(e.to_string()))
        }
    }
}
