//! Typed services for the Xelon HQ API.
//!
//! [`XelonClient`] wraps the transport from `xelon-core` and hands out one
//! service per resource collection:
//!
//! ```no_run
//! # async fn run() -> xelon_api::Result<()> {
//! use xelon_api::{Context, SearchListOptions, XelonClient};
//!
//! let client = XelonClient::builder("token").with_client_id("tenant").build()?;
//! let options = SearchListOptions::new().with_search("web");
//! let (devices, response) = client.devices().list(&Context::background(), Some(&options)).await?;
//! println!("{} devices, page {:?}", devices.len(), response.meta().map(|m| m.page));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod services;

pub use client::{XelonClient, XelonClientBuilder};
pub use models::{
    ApiResponse, Cloud, ClusterControlPlane, ClusterControlPlaneNode, ClusterPool, ClusterPoolNode,
    Device, DeviceAddDiskRequest, DeviceCreateNetwork, DeviceCreateRequest,
    DeviceDeleteDiskRequest, DeviceStorage, DeviceTemplate, DeviceTenant, DeviceUpdateDiskRequest,
    DeviceUpdateHardwareRequest, DeviceUpdateRequest, Firewall, FirewallCreateRequest,
    FirewallForwardingRule, FirewallUpdateRequest, Iso, IsoCreateRequest, IsoUpdateRequest,
    KubernetesCluster, KubernetesClusterHealth, LoadBalancer, LoadBalancerAssignedDevice,
    LoadBalancerCluster, LoadBalancerClusterCreateRequest, LoadBalancerClusterCreateResponse,
    LoadBalancerClusterForwardingRule, LoadBalancerClusterForwardingRuleBackend,
    LoadBalancerClusterForwardingRuleFrontend, LoadBalancerClusterForwardingRuleUpdateRequest,
    LoadBalancerClusterNodesSpec, LoadBalancerClusterVirtualIp, LoadBalancerCreateRequest,
    LoadBalancerForwardingRule, LoadBalancerUpdateAssignedDevicesRequest,
    LoadBalancerUpdateRequest, Network, NetworkLanCreateRequest, NetworkLanUpdateRequest,
    NetworkWanCreateRequest, PersistentStorage, PersistentStorageAttachedDevice,
    PersistentStorageCreateRequest, SearchListOptions, SshKey, SshKeyCreateRequest,
    SshKeyUpdateRequest, SuccessResponse, Template, TemplateCreateRequest, TemplateListOptions,
    TemplateUpdateRequest, Tenant, RULE_TYPE_INBOUND, RULE_TYPE_OUTBOUND,
};
pub use services::{
    CloudsService, DevicesService, FirewallsService, IsosService, KubernetesService,
    LoadBalancerClustersService, LoadBalancersService, NetworksService, PersistentStoragesService,
    SshKeysService, TemplatesService, TenantsService,
};
pub use xelon_core::{Context, Error, ListOptions, Meta, Response};

/// Convenient result alias that reuses the shared Xelon error type.
pub type Result<T> = xelon_core::Result<T>;
