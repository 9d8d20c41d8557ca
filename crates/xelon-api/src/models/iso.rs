//! Custom ISO image models.

use crate::models::Cloud;
use serde::{Deserialize, Serialize};

/// A custom ISO image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso {
    /// Whether the image can be mounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cloud the image is stored in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO identifier.
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the owning tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Upload finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

/// Payload for uploading an ISO from a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoCreateRequest {
    /// Category to file the image under.
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    /// Cloud to store the image in.
    #[serde(rename = "cloudIdentifier")]
    pub cloud_id: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display name.
    pub name: String,
    /// Owning tenant, defaults to the caller's.
    #[serde(rename = "tenantIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Download location of the image.
    pub url: String,
}

/// Payload for editing an ISO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoUpdateRequest {
    /// Category to file the image under.
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    /// Free-form description.
    pub description: String,
    /// Display name.
    pub name: String,
}
