//! Firewall endpoints.

use super::{execute, fetch, list, require, submit_data};
use crate::models::{
    Firewall, FirewallCreateRequest, FirewallForwardingRule, FirewallUpdateRequest,
    SearchListOptions,
};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "firewalls";

/// Access to `firewalls` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FirewallsService<'a> {
    client: &'a Client,
}

impl<'a> FirewallsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List firewalls.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<Firewall>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch a firewall including its forwarding rules.
    pub async fn get(&self, ctx: &Context, firewall_id: &str) -> Result<(Firewall, Response)> {
        require(firewall_id, "firewall id")?;
        let path = format!("{BASE_PATH}/{firewall_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Deploy a firewall.
    pub async fn create(
        &self,
        ctx: &Context,
        request: &FirewallCreateRequest,
    ) -> Result<(Firewall, Response)> {
        submit_data(self.client, ctx, Method::POST, BASE_PATH, request).await
    }

    /// Rename a firewall.
    pub async fn update(
        &self,
        ctx: &Context,
        firewall_id: &str,
        request: &FirewallUpdateRequest,
    ) -> Result<(Firewall, Response)> {
        require(firewall_id, "firewall id")?;
        let path = format!("{BASE_PATH}/{firewall_id}");
        submit_data(self.client, ctx, Method::PUT, &path, request).await
    }

    /// Delete a firewall.
    pub async fn delete(&self, ctx: &Context, firewall_id: &str) -> Result<Response> {
        require(firewall_id, "firewall id")?;
        let path = format!("{BASE_PATH}/{firewall_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }

    /// Add a forwarding rule.
    pub async fn create_forwarding_rule(
        &self,
        ctx: &Context,
        firewall_id: &str,
        rule: &FirewallForwardingRule,
    ) -> Result<(FirewallForwardingRule, Response)> {
        require(firewall_id, "firewall id")?;
        let path = format!("{BASE_PATH}/{firewall_id}/rules");
        submit_data(self.client, ctx, Method::POST, &path, rule).await
    }

    /// Replace a forwarding rule.
    pub async fn update_forwarding_rule(
        &self,
        ctx: &Context,
        firewall_id: &str,
        rule_id: &str,
        rule: &FirewallForwardingRule,
    ) -> Result<(FirewallForwardingRule, Response)> {
        require(firewall_id, "firewall id")?;
        require(rule_id, "forwarding rule id")?;
        let path = format!("{BASE_PATH}/{firewall_id}/rules/{rule_id}");
        submit_data(self.client, ctx, Method::PUT, &path, rule).await
    }

    /// Remove a forwarding rule.
    pub async fn delete_forwarding_rule(
        &self,
        ctx: &Context,
        firewall_id: &str,
        rule_id: &str,
    ) -> Result<Response> {
        require(firewall_id, "firewall id")?;
        require(rule_id, "forwarding rule id")?;
        let path = format!("{BASE_PATH}/{firewall_id}/rules/{rule_id}");
        execute(self.client, ctx, Method::DELETE, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::setup;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};
    use xelon_core::Error;

    #[tokio::test]
    async fn create_inbound_rule_sends_list_source() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/firewalls/fw-1/rules"))
            .and(body_json(json!({
                "type": "inbound",
                "protocol": "tcp",
                "externalPort": 443,
                "port": 8443,
                "sourceIp": ["0.0.0.0/0"],
                "destinationIp": "10.0.0.5"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {
                    "identifier": "r-9",
                    "type": "inbound",
                    "sourceIp": ["0.0.0.0/0"],
                    "destinationIp": "10.0.0.5"
                }
            })))
            .mount(&server)
            .await;

        let rule = FirewallForwardingRule::inbound(vec!["0.0.0.0/0".to_string()], "10.0.0.5")
            .with_protocol("tcp")
            .with_ports(443, 8443);
        let (created, response) = FirewallsService::new(&client)
            .create_forwarding_rule(&Context::background(), "fw-1", &rule)
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 201);
        assert_eq!(created.id.as_deref(), Some("r-9"));
        assert_eq!(created.source_ip_addresses, vec!["0.0.0.0/0"]);
        assert_eq!(created.destination_ip_address, "10.0.0.5");
    }

    #[tokio::test]
    async fn get_decodes_rules() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/firewalls/fw-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifier": "fw-1",
                "forwardingRules": [
                    {"identifier": "r-1", "type": "outbound", "sourceIp": "10.0.0.5", "destinationIp": ["8.8.8.8/32"]}
                ]
            })))
            .mount(&server)
            .await;

        let (firewall, _) = FirewallsService::new(&client)
            .get(&Context::background(), "fw-1")
            .await
            .unwrap();
        let rule = &firewall.forwarding_rules[0];
        assert_eq!(rule.source_ip_address, "10.0.0.5");
        assert_eq!(rule.destination_ip_addresses, vec!["8.8.8.8/32"]);
    }

    #[tokio::test]
    async fn delete_rule_requires_both_ids() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/firewalls/fw-1/rules/r-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let firewalls = FirewallsService::new(&client);
        let ctx = Context::background();
        let err = firewalls.delete_forwarding_rule(&ctx, "fw-1", "").await.unwrap_err();
        assert!(matches!(err, Error::EmptyArgument("forwarding rule id")));

        firewalls.delete_forwarding_rule(&ctx, "fw-1", "r-1").await.unwrap();
    }
}
