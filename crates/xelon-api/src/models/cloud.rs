//! Cloud (hypervisor cluster) models.

use serde::{Deserialize, Serialize};

/// A cloud a tenant can deploy resources into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cloud {
    /// Cloud identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `public` or `private`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub cloud_type: Option<String>,
    /// Hypervisor type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hv_type: Option<String>,
}
