//! Talos Kubernetes cluster models.

use crate::models::Cloud;
use serde::{Deserialize, Serialize};

/// A managed Kubernetes cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesCluster {
    /// Cloud the cluster runs in.
    #[serde(rename = "hv_system", default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Creation time as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last health probe result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<KubernetesClusterHealth>,
    /// Cluster identifier.
    #[serde(rename = "clusterIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Health probe result of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesClusterHealth {
    /// Health summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    /// Time of the last probe.
    #[serde(rename = "lastCheckingData", default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
}

/// Control plane sizing and nodes of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterControlPlane {
    /// CPU cores per control plane node.
    #[serde(rename = "control_plane_cpu", default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    /// Disk size per node in GB.
    #[serde(rename = "control_plane_disk", default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<u64>,
    /// Memory per node in GB.
    #[serde(rename = "control_plane_ram", default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    /// Control plane nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<ClusterControlPlaneNode>,
}

/// A control plane node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterControlPlaneNode {
    /// Node identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Backing device identifier.
    #[serde(rename = "localvmid", default, skip_serializing_if = "Option::is_none")]
    pub local_vm_id: Option<String>,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A worker pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPool {
    /// CPU cores per node.
    #[serde(rename = "cpu", default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    /// Disk size per node in GB.
    #[serde(rename = "disk", default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<u64>,
    /// Pool identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Memory per node in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    /// Pool name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Worker nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<ClusterPoolNode>,
}

/// A worker node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPoolNode {
    /// Node identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Backing device identifier.
    #[serde(rename = "localvmid", default, skip_serializing_if = "Option::is_none")]
    pub local_vm_id: Option<String>,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
