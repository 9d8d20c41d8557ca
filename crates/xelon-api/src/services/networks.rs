//! Network endpoints.

use super::{execute, fetch, list, require, submit, submit_data};
use crate::models::{
    Network, NetworkLanCreateRequest, NetworkLanUpdateRequest, NetworkWanCreateRequest,
    SearchListOptions,
};
use xelon_core::{Client, Context, Method, Response, Result};

const BASE_PATH: &str = "networks";

/// Access to `networks` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct NetworksService<'a> {
    client: &'a Client,
}

impl<'a> NetworksService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List networks.
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&SearchListOptions>,
    ) -> Result<(Vec<Network>, Response)> {
        list(self.client, ctx, BASE_PATH, options).await
    }

    /// Fetch a network.
    pub async fn get(&self, ctx: &Context, network_id: &str) -> Result<(Network, Response)> {
        require(network_id, "network id")?;
        let path = format!("{BASE_PATH}/{network_id}");
        fetch(self.client, ctx, Method::GET, &path).await
    }

    /// Create a LAN.
    pub async fn create_lan(
        &self,
        ctx: &Context,
        request: &NetworkLanCreateRequest,
    ) -> Result<(Network, Response)> {
        let path = format!("{BASE_PATH}/lan");
        submit_data(self.client, ctx, Method::POST, &path, request).await
    }

    /// Edit a LAN. The updated network comes back without an envelope.
    pub async fn update_lan(
        &self,
        ctx: &Context,
        network_id: &str,
        request: &NetworkLanUpdateRequest,
    ) -> Result<(Network, Response)> {
        require(network_id, "network id")?;
        let path = format!("{BASE_PATH}/{network_id}/lan");
        submit(self.client, ctx, Method::PATCH, &path, request).await
    }

    /// Create a WAN.
    pub async fn create_wan(
        &self,
        ctx: &Context,
        request: &NetworkWanCreateRequest,
    ) -> Result<(Network, Response)> {
        let path = format!("{BASE_PATH}/wan");
        submit_data(self.client, ctx, Method::POST, &path, request).await
    }

    /// Delete a network.
    pub async fn delete(&self, ctx: &Context, network_id: &str) -> Result<Response> {
        require(network_id, "network id")?;
        let path = format!("{BASE_PATH}/{network_id}");
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

    #[tokio::test]
    async fn create_lan_omits_unset_fields() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/networks/lan"))
            .and(body_json(json!({
                "cloudIdentifier": "c-1",
                "dns1": "1.1.1.1",
                "gateway": "10.0.0.1",
                "name": "backend",
                "network": "10.0.0.0",
                "networkSpeedValue": 1000,
                "networkSize": 24
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"identifier": "net-1", "type": "LAN", "networkSize": 24}
            })))
            .mount(&server)
            .await;

        let request = NetworkLanCreateRequest {
            cloud_id: "c-1".to_string(),
            dns_primary: "1.1.1.1".to_string(),
            gateway: "10.0.0.1".to_string(),
            name: "backend".to_string(),
            network: "10.0.0.0".to_string(),
            network_speed: 1000,
            subnet_size: 24,
            ..NetworkLanCreateRequest::default()
        };
        let (network, _) = NetworksService::new(&client)
            .create_lan(&Context::background(), &request)
            .await
            .unwrap();
        assert_eq!(network.id.as_deref(), Some("net-1"));
        assert_eq!(network.subnet_size, Some(24));
    }

    #[tokio::test]
    async fn update_lan_decodes_bare_object() {
        let (server, client) = setup().await;
        Mock::given(method("PATCH"))
            .and(path("/api/networks/net-1/lan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifier": "net-1", "name": "renamed"
            })))
            .mount(&server)
            .await;

        let request = NetworkLanUpdateRequest {
            name: "renamed".to_string(),
            ..NetworkLanUpdateRequest::default()
        };
        let (network, _) = NetworksService::new(&client)
            .update_lan(&Context::background(), "net-1", &request)
            .await
            .unwrap();
        assert_eq!(network.name.as_deref(), Some("renamed"));
    }
}
