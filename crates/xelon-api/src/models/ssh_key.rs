//! SSH key models.

use serde::{Deserialize, Serialize};

/// A stored public SSH key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    /// Creation time as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Key identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Public key in OpenSSH format.
    #[serde(rename = "sshKey", default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Payload for storing a new SSH key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKeyCreateRequest {
    /// Display name.
    pub name: String,
    /// Public key in OpenSSH format.
    #[serde(rename = "sshKey")]
    pub public_key: String,
}

/// Payload for editing an SSH key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKeyUpdateRequest {
    /// Display name.
    pub name: String,
    /// Public key in OpenSSH format.
    #[serde(rename = "sshKey")]
    pub public_key: String,
}
