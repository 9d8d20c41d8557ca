//! Load balancer models.

use crate::models::{Cloud, Tenant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A layer 4 or layer 7 load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    /// Devices receiving traffic.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_devices: Vec<LoadBalancerAssignedDevice>,
    /// Cloud the load balancer runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Public address.
    #[serde(rename = "externalIp", default, skip_serializing_if = "Option::is_none")]
    pub external_ip_address: Option<String>,
    /// Configured forwarding rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forwarding_rules: Vec<LoadBalancerForwardingRule>,
    /// Health status.
    #[serde(rename = "health", default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    /// Load balancer identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Address on the internal network.
    #[serde(rename = "internalIp", default, skip_serializing_if = "Option::is_none")]
    pub internal_ip_address: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provisioning state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    /// Owning tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
}

/// A device behind a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerAssignedDevice {
    /// Device identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Device name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A load balancer forwarding rule, also used as the create and update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerForwardingRule {
    /// Rule identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Addresses the rule applies to.
    #[serde(rename = "ip", default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    /// Ports the rule forwards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
}

/// Payload for creating a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerCreateRequest {
    /// Devices receiving traffic.
    #[serde(rename = "assignedDevicesIdentifiers", default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_device_ids: Vec<String>,
    /// Cloud to deploy into.
    #[serde(rename = "cloudIdentifier")]
    pub cloud_id: String,
    /// Reserved public address.
    #[serde(rename = "externalIpIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub external_ip_address_id: Option<String>,
    /// Public network.
    #[serde(rename = "externalNetworkIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub external_network_id: Option<String>,
    /// Address on the internal network.
    #[serde(rename = "internalIp", default, skip_serializing_if = "Option::is_none")]
    pub internal_ip_address: Option<String>,
    /// Internal network to attach.
    #[serde(rename = "internalNetworkIdentifier")]
    pub internal_network_id: String,
    /// `layer4` or `layer7`.
    #[serde(rename = "loadBalancingType")]
    pub load_balancing_type: String,
    /// Display name.
    pub name: String,
    /// Owning tenant.
    #[serde(rename = "tenantIdentifier")]
    pub tenant_id: String,
}

/// Payload for renaming a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerUpdateRequest {
    /// New display name.
    pub name: String,
}

/// Payload replacing the set of devices behind a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerUpdateAssignedDevicesRequest {
    /// Devices receiving traffic.
    #[serde(rename = "deviceIdentifiers")]
    pub device_ids: Vec<String>,
}
