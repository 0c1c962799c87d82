// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Names of the OVN-Kubernetes components shared across lookups.

use std::fmt;

/// Namespace that holds every OVN-Kubernetes component
pub const OVN_NAMESPACE: &str = "openshift-ovn-kubernetes";
/// ConfigMap carrying the interconnect configuration
pub const OVN_INTERCONNECT_CONFIGMAP_NAME: &str = "ovn-interconnect-configuration";

pub const OVN_MASTER: &str = "ovnkube-master";
pub const OVN_CONTROL_PLANE: &str = "ovnkube-control-plane";
pub const OVN_NODE: &str = "ovnkube-node";
pub const OVN_CONTROLLER: &str = "ovnkube-controller";
/// 4.13 ipsec daemonset
pub const OVN_IPSEC: &str = "ovn-ipsec";
/// 4.14 ipsec daemonset
pub const OVN_IPSEC_HOST: &str = "ovn-ipsec-host";
/// 4.14 ipsec daemonset
pub const OVN_IPSEC_CONTAINERIZED: &str = "ovn-ipsec-containerized";

/// Name this tool reports itself as
pub const APP_NAME: &str = "ovn-interconnect";

/// OVN-Kubernetes workloads living in [`OVN_NAMESPACE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    Master,
    ControlPlane,
    Node,
    Controller,
    Ipsec,
    IpsecHost,
    IpsecContainerized,
}

impl Workload {
    pub const ALL: [Workload; 7] = [
        Workload::Master,
        Workload::ControlPlane,
        Workload::Node,
        Workload::Controller,
        Workload::Ipsec,
        Workload::IpsecHost,
        Workload::IpsecContainerized,
    ];

    /// Object name of the workload
    pub const fn name(self) -> &'static str {
        match self {
            Workload::Master => OVN_MASTER,
            Workload::ControlPlane => OVN_CONTROL_PLANE,
            Workload::Node => OVN_NODE,
            Workload::Controller => OVN_CONTROLLER,
            Workload::Ipsec => OVN_IPSEC,
            Workload::IpsecHost => OVN_IPSEC_HOST,
            Workload::IpsecContainerized => OVN_IPSEC_CONTAINERIZED,
        }
    }

    /// Whether this is one of the ipsec daemonset variants
    pub const fn is_ipsec(self) -> bool {
        matches!(
            self,
            Workload::Ipsec | Workload::IpsecHost | Workload::IpsecContainerized
        )
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
