//! Device (virtual machine) models.

use serde::{Deserialize, Serialize};

/// A virtual machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Number of CPU cores.
    #[serde(rename = "cpu", default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    /// Primary disk size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<u64>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Guest host name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    /// Device identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether monitoring is enabled.
    #[serde(rename = "monitoring", default, skip_serializing_if = "Option::is_none")]
    pub monitoring_enabled: Option<bool>,
    /// Whether the device is running.
    #[serde(rename = "isPoweredOn", default, skip_serializing_if = "Option::is_none")]
    pub powered_on: Option<bool>,
    /// Memory in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,
    /// Provisioning state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    /// Attached disks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storages: Vec<DeviceStorage>,
    /// Swap disk size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_disk_size: Option<u64>,
    /// Template the device was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<DeviceTemplate>,
    /// Owning tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<DeviceTenant>,
}

/// A disk attached to a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStorage {
    /// Disk identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Disk name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Disk type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    /// SCSI unit number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<u32>,
}

/// Reference to a device's template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTemplate {
    /// Template identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Reference to a device's tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTenant {
    /// Tenant identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tenant name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payload for creating a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCreateRequest {
    /// Backup job to attach.
    #[serde(rename = "backJobId", default, skip_serializing_if = "Option::is_none")]
    pub backup_job_id: Option<u64>,
    /// Number of CPU cores.
    #[serde(rename = "cpu")]
    pub cpu_cores: u32,
    /// Primary disk size in GB.
    pub disk_size: u64,
    /// Display name.
    pub display_name: String,
    /// Guest host name.
    pub host_name: String,
    /// Enable monitoring.
    #[serde(rename = "isMonitoring")]
    pub enable_monitoring: bool,
    /// Networks to connect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<DeviceCreateNetwork>,
    /// Initial root password.
    pub password: String,
    /// Must match `password`.
    pub password_confirmation: String,
    /// Memory in GB.
    pub ram: u32,
    /// Script to run after provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<String>,
    /// Send a notification email when ready.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub send_email: bool,
    /// SSH key to install.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key_id: Option<String>,
    /// Swap disk size in GB.
    pub swap_disk_size: u64,
    /// Template to create the device from.
    pub template_id: String,
    /// Owning tenant.
    #[serde(rename = "tenantIdentifier")]
    pub tenant_id: String,
}

/// Network attachment for [`DeviceCreateRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCreateNetwork {
    /// Connect the NIC when the device powers on.
    pub connect_on_power_on: bool,
    /// Fixed IP address.
    #[serde(rename = "ip", default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Identifier of a reserved IP address.
    #[serde(rename = "ipId", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_id: Option<String>,
    /// Network to connect to.
    pub network_id: String,
}

/// Payload for renaming a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdateRequest {
    /// New display name.
    pub display_name: String,
}

/// Payload for resizing a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceUpdateHardwareRequest {
    /// Number of CPU cores.
    #[serde(rename = "cpu")]
    pub cpu_cores: u32,
    /// Memory in GB.
    pub ram: u32,
}

/// Payload for adding a disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAddDiskRequest {
    /// Size in GB.
    pub size: u64,
    /// Use HDD instead of SSD storage.
    #[serde(rename = "isHdd", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_hdd: bool,
}

/// Payload for growing a disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdateDiskRequest {
    /// Disk to grow.
    pub disk_id: String,
    /// New size in GB.
    pub size: u64,
    /// Grow the guest partition as well.
    pub extend_partition: bool,
    /// Snapshot the disk first.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub create_snapshot: bool,
}

/// Payload for removing a disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDeleteDiskRequest {
    /// Disk to remove.
    pub disk_id: String,
    /// Account password confirming the deletion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
