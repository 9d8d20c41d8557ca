//! Persistent storage models.

use crate::models::{Cloud, Tenant};
use serde::{Deserialize, Serialize};

/// A persistent volume that can be attached to devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentStorage {
    /// Devices the volume is attached to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attached_devices: Vec<PersistentStorageAttachedDevice>,
    /// Size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
    /// Cloud the volume lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Whether a filesystem was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<bool>,
    /// Storage identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
    /// Storage type code.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<i32>,
    /// Volume UUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// A device a volume is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentStorageAttachedDevice {
    /// Device identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Device name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payload for creating a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentStorageCreateRequest {
    /// Cloud to create the volume in.
    #[serde(rename = "cloudIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<String>,
    /// Device to attach right away.
    #[serde(rename = "deviceIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Size in GB.
    #[serde(rename = "storageSize")]
    pub size: u64,
    /// Owning tenant, defaults to the caller's.
    #[serde(rename = "tenantIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Storage type code.
    #[serde(rename = "type")]
    pub storage_type: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttachDetachDeviceRequest<'a> {
    #[serde(rename = "deviceIdentifier")]
    pub(crate) device_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtendRequest {
    #[serde(rename = "diskSize")]
    pub(crate) capacity: u64,
}
