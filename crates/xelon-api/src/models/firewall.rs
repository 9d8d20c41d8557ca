//! Firewall models.
//!
//! Forwarding rules carry their source and destination addresses in two
//! shapes. Inbound rules accept several source CIDRs and forward to one
//! destination; outbound rules are the reverse. On the wire each side is
//! either a string or a list of strings under the same key, so the rule
//! exposes both representations and picks the populated one when encoding.

use crate::models::{Cloud, Tenant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xelon_core::OneOrMany;

/// Rule type of traffic entering the firewall.
pub const RULE_TYPE_INBOUND: &str = "inbound";
/// Rule type of traffic leaving the firewall.
pub const RULE_TYPE_OUTBOUND: &str = "outbound";

/// A firewall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firewall {
    /// Cloud the firewall runs in.
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
    pub forwarding_rules: Vec<FirewallForwardingRule>,
    /// Health status.
    #[serde(rename = "health", default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    /// Firewall identifier.
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

/// A firewall forwarding rule.
///
/// After decoding, the address side that arrived as a string fills the
/// scalar field and the side that arrived as a list fills the list field.
/// When encoding, a non-empty scalar is sent as a string, otherwise a
/// non-empty list is sent as an array, otherwise the key is left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ForwardingRuleWire", into = "ForwardingRuleWire")]
pub struct FirewallForwardingRule {
    /// Rule identifier.
    pub id: Option<String>,
    /// [`RULE_TYPE_INBOUND`] or [`RULE_TYPE_OUTBOUND`].
    pub rule_type: Option<String>,
    /// `tcp` or `udp`.
    pub protocol: Option<String>,
    /// Port exposed on the firewall.
    pub external_port: Option<u16>,
    /// Port on the internal target.
    pub internal_port: Option<u16>,
    /// Single source address.
    pub source_ip_address: String,
    /// Source CIDRs.
    pub source_ip_addresses: Vec<String>,
    /// Single destination address.
    pub destination_ip_address: String,
    /// Destination CIDRs.
    pub destination_ip_addresses: Vec<String>,
}

impl FirewallForwardingRule {
    /// An inbound rule forwarding traffic from `sources` to `destination`.
    #[must_use]
    pub fn inbound(sources: Vec<String>, destination: impl Into<String>) -> Self {
        Self {
            rule_type: Some(RULE_TYPE_INBOUND.to_string()),
            source_ip_addresses: sources,
            destination_ip_address: destination.into(),
            ..Self::default()
        }
    }

    /// An outbound rule forwarding traffic from `source` to `destinations`.
    #[must_use]
    pub fn outbound(source: impl Into<String>, destinations: Vec<String>) -> Self {
        Self {
            rule_type: Some(RULE_TYPE_OUTBOUND.to_string()),
            source_ip_address: source.into(),
            destination_ip_addresses: destinations,
            ..Self::default()
        }
    }

    /// Set the protocol.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the external and internal ports.
    #[must_use]
    pub const fn with_ports(mut self, external: u16, internal: u16) -> Self {
        self.external_port = Some(external);
        self.internal_port = Some(internal);
        self
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ForwardingRuleWire {
    #[serde(rename = "destinationIp", default, skip_serializing_if = "Option::is_none")]
    destination_ip: Option<OneOrMany>,
    #[serde(rename = "externalPort", default, skip_serializing_if = "Option::is_none")]
    external_port: Option<u16>,
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "port", default, skip_serializing_if = "Option::is_none")]
    internal_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    protocol: Option<String>,
    #[serde(rename = "sourceIp", default, skip_serializing_if = "Option::is_none")]
    source_ip: Option<OneOrMany>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    rule_type: Option<String>,
}

impl From<ForwardingRuleWire> for FirewallForwardingRule {
    fn from(wire: ForwardingRuleWire) -> Self {
        let (source_ip_address, source_ip_addresses) =
            wire.source_ip.map(OneOrMany::into_parts).unwrap_or_default();
        let (destination_ip_address, destination_ip_addresses) = wire
            .destination_ip
            .map(OneOrMany::into_parts)
            .unwrap_or_default();

        Self {
            id: wire.id,
            rule_type: wire.rule_type,
            protocol: wire.protocol,
            external_port: wire.external_port,
            internal_port: wire.internal_port,
            source_ip_address,
            source_ip_addresses,
            destination_ip_address,
            destination_ip_addresses,
        }
    }
}

impl From<FirewallForwardingRule> for ForwardingRuleWire {
    fn from(rule: FirewallForwardingRule) -> Self {
        Self {
            destination_ip: OneOrMany::from_parts(
                &rule.destination_ip_address,
                &rule.destination_ip_addresses,
            ),
            external_port: rule.external_port,
            id: rule.id,
            internal_port: rule.internal_port,
            protocol: rule.protocol,
            source_ip: OneOrMany::from_parts(&rule.source_ip_address, &rule.source_ip_addresses),
            rule_type: rule.rule_type,
        }
    }
}

/// Payload for creating a firewall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallCreateRequest {
    /// Cloud to deploy into.
    #[serde(rename = "cloudIdentifier")]
    pub cloud_id: String,
    /// Address on the internal network.
    #[serde(rename = "internalIp", default, skip_serializing_if = "Option::is_none")]
    pub internal_ip_address: Option<String>,
    /// Internal network to attach.
    #[serde(rename = "internalNetworkIdentifier")]
    pub internal_network_id: String,
    /// Display name.
    pub name: String,
    /// Owning tenant.
    #[serde(rename = "tenantIdentifier")]
    pub tenant_id: String,
}

/// Payload for renaming a firewall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallUpdateRequest {
    /// New display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_inbound_rule() {
        let rule: FirewallForwardingRule = serde_json::from_value(json!({
            "identifier": "r-1",
            "type": "inbound",
            "protocol": "tcp",
            "externalPort": 443,
            "port": 8443,
            "sourceIp": ["10.0.0.0/24", "192.168.1.0/24"],
            "destinationIp": "10.0.0.10"
        }))
        .unwrap();

        assert_eq!(rule.id.as_deref(), Some("r-1"));
        assert_eq!(rule.external_port, Some(443));
        assert_eq!(rule.internal_port, Some(8443));
        assert!(rule.source_ip_address.is_empty());
        assert_eq!(rule.source_ip_addresses, vec!["10.0.0.0/24", "192.168.1.0/24"]);
        assert_eq!(rule.destination_ip_address, "10.0.0.10");
        assert!(rule.destination_ip_addresses.is_empty());
    }

    #[test]
    fn outbound_rule_round_trips() {
        let rule = FirewallForwardingRule::outbound(
            "10.0.0.10",
            vec!["0.0.0.0/0".to_string(), "::/0".to_string()],
        )
        .with_protocol("udp")
        .with_ports(53, 53);

        let encoded = serde_json::to_value(&rule).unwrap();
        assert_eq!(encoded["sourceIp"], json!("10.0.0.10"));
        assert_eq!(encoded["destinationIp"], json!(["0.0.0.0/0", "::/0"]));
        assert_eq!(encoded["type"], json!("outbound"));

        let decoded: FirewallForwardingRule = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, rule);
    }

    #[test]
    fn empty_address_sides_are_omitted() {
        let rule = FirewallForwardingRule {
            protocol: Some("tcp".to_string()),
            ..FirewallForwardingRule::default()
        };
        let encoded = serde_json::to_value(&rule).unwrap();
        assert_eq!(encoded, json!({"protocol": "tcp"}));
    }

    #[test]
    fn scalar_wins_when_both_sides_are_set() {
        let rule = FirewallForwardingRule {
            source_ip_address: "1.1.1.1".to_string(),
            source_ip_addresses: vec!["2.2.2.0/24".to_string()],
            ..FirewallForwardingRule::default()
        };
        let encoded = serde_json::to_value(&rule).unwrap();
        assert_eq!(encoded["sourceIp"], json!("1.1.1.1"));
    }

    #[test]
    fn firewall_decodes_nested_rules() {
        let firewall: Firewall = serde_json::from_value(json!({
            "identifier": "fw-1",
            "name": "edge",
            "createdAt": "2024-03-01T10:00:00Z",
            "forwardingRules": [
                {"identifier": "r-1", "type": "inbound", "sourceIp": ["0.0.0.0/0"], "destinationIp": "10.0.0.5"}
            ],
            "tenant": {"identifier": "t-1"}
        }))
        .unwrap();
        assert_eq!(firewall.forwarding_rules.len(), 1);
        assert_eq!(firewall.forwarding_rules[0].destination_ip_address, "10.0.0.5");
        assert!(firewall.created_at.is_some());
    }
}
