//! Network models.

use crate::models::Cloud;
use serde::{Deserialize, Serialize};

/// A LAN or WAN network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Clouds the network spans.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clouds: Vec<Cloud>,
    /// Primary DNS server.
    #[serde(rename = "dns1", default, skip_serializing_if = "Option::is_none")]
    pub dns_primary: Option<String>,
    /// Secondary DNS server.
    #[serde(rename = "dns2", default, skip_serializing_if = "Option::is_none")]
    pub dns_secondary: Option<String>,
    /// Whether no device is connected.
    #[serde(rename = "isFree", default, skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
    /// Default gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Network identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Network address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Link speed in Mbit/s.
    #[serde(rename = "networkSpeedValue", default, skip_serializing_if = "Option::is_none")]
    pub network_speed: Option<u32>,
    /// Whether the network is stretched across clouds.
    #[serde(rename = "isStretched", default, skip_serializing_if = "Option::is_none")]
    pub stretched: Option<bool>,
    /// Prefix length.
    #[serde(rename = "networkSize", default, skip_serializing_if = "Option::is_none")]
    pub subnet_size: Option<u8>,
    /// `LAN` or `WAN`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
}

/// Payload for creating a LAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLanCreateRequest {
    /// Cloud to create the network in.
    #[serde(rename = "cloudIdentifier")]
    pub cloud_id: String,
    /// Second cloud for a stretched network.
    #[serde(rename = "cloudForStretching", default, skip_serializing_if = "Option::is_none")]
    pub cloud_for_stretching: Option<String>,
    /// Primary DNS server.
    #[serde(rename = "dns1")]
    pub dns_primary: String,
    /// Secondary DNS server.
    #[serde(rename = "dns2", default, skip_serializing_if = "Option::is_none")]
    pub dns_secondary: Option<String>,
    /// Default gateway.
    pub gateway: String,
    /// Display name.
    pub name: String,
    /// Network address.
    pub network: String,
    /// Link speed in Mbit/s.
    #[serde(rename = "networkSpeedValue")]
    pub network_speed: u32,
    /// Stretch the network across clouds.
    #[serde(rename = "isStretched", default, skip_serializing_if = "std::ops::Not::not")]
    pub stretched: bool,
    /// Prefix length.
    #[serde(rename = "networkSize")]
    pub subnet_size: u8,
    /// Owning tenant, defaults to the caller's.
    #[serde(rename = "tenantIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Payload for editing a LAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLanUpdateRequest {
    /// Primary DNS server.
    #[serde(rename = "dns1")]
    pub dns_primary: String,
    /// Secondary DNS server.
    #[serde(rename = "dns2", default, skip_serializing_if = "Option::is_none")]
    pub dns_secondary: Option<String>,
    /// Default gateway.
    pub gateway: String,
    /// Display name.
    pub name: String,
    /// Network address.
    pub network: String,
    /// Link speed in Mbit/s.
    #[serde(rename = "networkSpeedValue")]
    pub network_speed: u32,
}

/// Payload for creating a WAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkWanCreateRequest {
    /// Cloud to create the network in.
    #[serde(rename = "cloudIdentifier")]
    pub cloud_id: String,
    /// Second cloud for a stretched network.
    #[serde(rename = "cloudForStretching", default, skip_serializing_if = "Option::is_none")]
    pub cloud_for_stretching: Option<String>,
    /// Display name.
    pub name: String,
    /// Link speed in Mbit/s.
    #[serde(rename = "networkSpeedValue")]
    pub network_speed: u32,
    /// Stretch the network across clouds.
    #[serde(rename = "isStretched", default, skip_serializing_if = "std::ops::Not::not")]
    pub stretched: bool,
    /// Prefix length.
    #[serde(rename = "networkSize")]
    pub subnet_size: u8,
    /// Owning tenant, defaults to the caller's.
    #[serde(rename = "tenantIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}
