//! Load balancer cluster models.
//!
//! These endpoints return bare JSON bodies rather than `data` envelopes.

use crate::models::Cloud;
use serde::{Deserialize, Serialize};

/// A load balancer cluster attached to a Kubernetes cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerCluster {
    /// Cloud the cluster runs in.
    #[serde(rename = "hv_system", default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Cluster identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kubernetes cluster served by this load balancer.
    #[serde(rename = "kubernetesClusterIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_cluster_id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Owning tenant.
    #[serde(rename = "tenantIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Payload for creating a load balancer cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerClusterCreateRequest {
    /// Numeric cloud identifier.
    pub cloud_id: i64,
    /// Kubernetes cluster to serve.
    #[serde(rename = "kubernetesClusterIdentifier")]
    pub kubernetes_cluster_id: String,
    /// Display name.
    pub name: String,
    /// Node sizing.
    pub nodes_spec: LoadBalancerClusterNodesSpec,
}

/// Sizing of load balancer cluster nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerClusterNodesSpec {
    /// CPU cores per node.
    pub cpu_core_count: u32,
    /// Disk size per node in GB.
    pub disk: u64,
    /// Memory per node in GB.
    pub memory: u32,
}

/// Body returned after requesting a new cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerClusterCreateResponse {
    /// Identifier of the new cluster.
    #[serde(rename = "identifier", default)]
    pub id: String,
    /// Initial status.
    #[serde(default)]
    pub status: String,
}

/// A virtual IP of a load balancer cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerClusterVirtualIp {
    /// Virtual IP identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Assigned address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Pool the address was taken from.
    #[serde(rename = "vipPoolIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    /// Address state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// A frontend to backend port mapping on a virtual IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerClusterForwardingRule {
    /// Backend side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<LoadBalancerClusterForwardingRuleBackend>,
    /// Frontend side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<LoadBalancerClusterForwardingRuleFrontend>,
}

/// Backend side of a cluster forwarding rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerClusterForwardingRuleBackend {
    /// Rule identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Backend port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// PROXY protocol version, `0` when disabled. Always sent.
    #[serde(default)]
    pub proxy_protocol: u8,
}

/// Frontend side of a cluster forwarding rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerClusterForwardingRuleFrontend {
    /// Rule identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Frontend port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Payload for changing a cluster forwarding rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerClusterForwardingRuleUpdateRequest {
    /// New port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// New PROXY protocol version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_protocol: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn disabled_proxy_protocol_is_still_sent() {
        let rule = LoadBalancerClusterForwardingRule {
            backend: Some(LoadBalancerClusterForwardingRuleBackend {
                port: Some(8080),
                ..Default::default()
            }),
            frontend: Some(LoadBalancerClusterForwardingRuleFrontend {
                port: Some(80),
                ..Default::default()
            }),
        };
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"backend": {"port": 8080, "proxy_protocol": 0}, "frontend": {"port": 80}})
        );
    }

    #[test]
    fn create_request_uses_wire_names() {
        let request = LoadBalancerClusterCreateRequest {
            cloud_id: 2,
            kubernetes_cluster_id: "k8s-1".to_string(),
            name: "ingress".to_string(),
            nodes_spec: LoadBalancerClusterNodesSpec {
                cpu_core_count: 2,
                disk: 20,
                memory: 4,
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "cloudId": 2,
                "kubernetesClusterIdentifier": "k8s-1",
                "name": "ingress",
                "nodesSpec": {"cpuCoreCount": 2, "disk": 20, "memory": 4}
            })
        );
    }
}
