// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookup of the OVN interconnect ConfigMap.
//!
//! [`get_interconnect_config_map`] is a passthrough to the cluster API with
//! fixed coordinates: it issues a single GET and hands back whatever the
//! client returned. Callers decide what a missing ConfigMap means, optionally
//! through [`find_interconnect_config_map`].

use crate::constants::{OVN_INTERCONNECT_CONFIGMAP_NAME, OVN_NAMESPACE};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Something that can fetch a namespaced ConfigMap by name
#[async_trait]
pub trait ConfigMapGetter: Send + Sync {
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<ConfigMap, kube::Error>;
}

#[async_trait]
impl ConfigMapGetter for Client {
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<ConfigMap, kube::Error> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.clone(), namespace);
        config_maps.get(name).await
    }
}

/// Reads from the namespace this Api was scoped to; `namespace` is ignored.
#[async_trait]
impl ConfigMapGetter for Api<ConfigMap> {
    async fn get_config_map(&self, _namespace: &str, name: &str) -> Result<ConfigMap, kube::Error> {
        self.get(name).await
    }
}

/// Fetch the interconnect ConfigMap from `openshift-ovn-kubernetes`.
///
/// Errors are returned exactly as the client produced them.
#[instrument(skip(client))]
pub async fn get_interconnect_config_map<C>(client: &C) -> Result<ConfigMap, kube::Error>
where
    C: ConfigMapGetter + ?Sized,
{
    debug!(
        "Getting ConfigMap {}/{}",
        OVN_NAMESPACE, OVN_INTERCONNECT_CONFIGMAP_NAME
    );
    client
        .get_config_map(OVN_NAMESPACE, OVN_INTERCONNECT_CONFIGMAP_NAME)
        .await
}

/// Like [`get_interconnect_config_map`], but a missing ConfigMap is `Ok(None)`
#[instrument(skip(client))]
pub async fn find_interconnect_config_map<C>(client: &C) -> Result<Option<ConfigMap>, kube::Error>
where
    C: ConfigMapGetter + ?Sized,
{
    match get_interconnect_config_map(client).await {
        Ok(cm) => Ok(Some(cm)),
        Err(e) if is_not_found(&e) => {
            debug!("Interconnect ConfigMap not present");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Whether the API server answered 404
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404)
}
