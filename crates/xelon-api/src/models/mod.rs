//! Data models for Xelon HQ resources.
//!
//! Response models keep every field optional: the API omits fields freely
//! and older accounts return sparse objects.

pub mod cloud;
pub mod device;
pub mod firewall;
pub mod iso;
pub mod kubernetes;
pub mod load_balancer;
pub mod load_balancer_cluster;
pub mod network;
pub mod options;
pub mod persistent_storage;
pub mod ssh_key;
pub mod template;
pub mod tenant;

pub use cloud::Cloud;
pub use device::{
    Device, DeviceAddDiskRequest, DeviceCreateNetwork, DeviceCreateRequest,
    DeviceDeleteDiskRequest, DeviceStorage, DeviceTemplate, DeviceTenant,
    DeviceUpdateDiskRequest, DeviceUpdateHardwareRequest, DeviceUpdateRequest,
};
pub use firewall::{
    Firewall, FirewallCreateRequest, FirewallForwardingRule, FirewallUpdateRequest,
    RULE_TYPE_INBOUND, RULE_TYPE_OUTBOUND,
};
pub use iso::{Iso, IsoCreateRequest, IsoUpdateRequest};
pub use kubernetes::{
    ClusterControlPlane, ClusterControlPlaneNode, ClusterPool, ClusterPoolNode,
    KubernetesCluster, KubernetesClusterHealth,
};
pub use load_balancer::{
    LoadBalancer, LoadBalancerAssignedDevice, LoadBalancerCreateRequest,
    LoadBalancerForwardingRule, LoadBalancerUpdateAssignedDevicesRequest,
    LoadBalancerUpdateRequest,
};
pub use load_balancer_cluster::{
    LoadBalancerCluster, LoadBalancerClusterCreateRequest, LoadBalancerClusterCreateResponse,
    LoadBalancerClusterForwardingRule, LoadBalancerClusterForwardingRuleBackend,
    LoadBalancerClusterForwardingRuleFrontend, LoadBalancerClusterForwardingRuleUpdateRequest,
    LoadBalancerClusterNodesSpec, LoadBalancerClusterVirtualIp,
};
pub use network::{Network, NetworkLanCreateRequest, NetworkLanUpdateRequest, NetworkWanCreateRequest};
pub use options::{SearchListOptions, TemplateListOptions};
pub use persistent_storage::{
    PersistentStorage, PersistentStorageAttachedDevice, PersistentStorageCreateRequest,
};
pub use ssh_key::{SshKey, SshKeyCreateRequest, SshKeyUpdateRequest};
pub use template::{Template, TemplateCreateRequest, TemplateUpdateRequest};
pub use tenant::Tenant;

use serde::{Deserialize, Serialize};
use xelon_core::{Meta, Paginated};

/// Confirmation returned by node management actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Confirmation text.
    #[serde(default)]
    pub success: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Storage affected by the action, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_storage: Option<PersistentStorage>,
}

/// `{"data": T, "message": ...}` envelope around single resources.
#[derive(Debug, Deserialize)]
pub(crate) struct DataRoot<T> {
    #[serde(default = "Option::default")]
    pub(crate) data: Option<T>,
}

impl<T> Default for DataRoot<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T: Default> DataRoot<T> {
    pub(crate) fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// `{"data": [T], "meta": {...}}` envelope around list responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ListRoot<T> {
    #[serde(default = "Vec::new")]
    pub(crate) data: Vec<T>,
    #[serde(default)]
    pub(crate) meta: Option<Meta>,
}

impl<T> Default for ListRoot<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: None,
        }
    }
}

impl<T> Paginated for ListRoot<T> {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}
